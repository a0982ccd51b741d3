#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);
