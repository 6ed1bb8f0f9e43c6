//! Notebook Adapter - 文件系统笔记本存储

mod fs_notebook_store;

pub use fs_notebook_store::FsNotebookStore;
