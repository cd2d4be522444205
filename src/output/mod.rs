// Output formatting — terminal display for sequences and similarity tables.

pub mod terminal;
