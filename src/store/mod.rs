pub mod path_store;
