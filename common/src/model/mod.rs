pub mod fish;
