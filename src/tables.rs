use serde::Serialize;

/// The TPC-H tables produced by `dbgen`, one `.tbl` file each.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Customer,
    Lineitem,
    Nation,
    Orders,
    Part,
    Partsupp,
    Region,
    Supplier,
}

impl Table {
    /// Every table, in the order the files are converted.
    pub const ALL: [Table; 8] = [
        Table::Customer,
        Table::Lineitem,
        Table::Nation,
        Table::Orders,
        Table::Part,
        Table::Partsupp,
        Table::Region,
        Table::Supplier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Customer => "customer",
            Table::Lineitem => "lineitem",
            Table::Nation => "nation",
            Table::Orders => "orders",
            Table::Part => "part",
            Table::Partsupp => "partsupp",
            Table::Region => "region",
            Table::Supplier => "supplier",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Table::Customer => "customer.tbl",
            Table::Lineitem => "lineitem.tbl",
            Table::Nation => "nation.tbl",
            Table::Orders => "orders.tbl",
            Table::Part => "part.tbl",
            Table::Partsupp => "partsupp.tbl",
            Table::Region => "region.tbl",
            Table::Supplier => "supplier.tbl",
        }
    }

    /// Number of columns in the table schema, i.e. the field count of a
    /// well-formed converted line.
    pub fn column_count(self) -> usize {
        match self {
            Table::Customer => 8,
            Table::Lineitem => 16,
            Table::Nation => 4,
            Table::Orders => 9,
            Table::Part => 9,
            Table::Partsupp => 5,
            Table::Region => 3,
            Table::Supplier => 7,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Table> {
        Table::ALL
            .into_iter()
            .find(|table| table.file_name() == file_name)
    }
}

pub fn default_file_names() -> Vec<&'static str> {
    Table::ALL.iter().map(|table| table.file_name()).collect()
}
