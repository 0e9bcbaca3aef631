pub mod fish_manager;

pub use fish_manager::FishManager;
