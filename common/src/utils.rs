pub mod wordfile;
