pub mod delete_row;
