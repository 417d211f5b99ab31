pub mod backtrack;
