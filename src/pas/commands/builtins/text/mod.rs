pub mod head;
pub mod sort;
pub mod tail;
