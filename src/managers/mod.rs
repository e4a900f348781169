// MyBrowser state managers
// Managers handle in-memory UI state: the tab collection.

pub mod tab_manager;
