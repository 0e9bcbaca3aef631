use crate::persistence::FishDao;
use log::error;
use std::fmt::Write;

/// Turns the catalog into the single block of text the viewer shows.
#[derive(Debug, Clone)]
pub struct FishManager {
    fish_dao: FishDao,
}

impl FishManager {
    pub fn new(fish_dao: FishDao) -> Self {
        Self { fish_dao }
    }

    /// Every record rendered with its `Display` layout, each followed by an
    /// empty line. An empty table gives an empty string.
    ///
    /// This is where storage failures stop: the error is logged and its
    /// message is returned as part of the text instead of being propagated.
    pub fn retrieve_fish(&self) -> String {
        let mut text = String::new();

        match self.fish_dao.find_all() {
            Ok(records) => {
                for record in &records {
                    let _ = writeln!(text, "{}", record);
                }
            }
            Err(e) => {
                error!("Error retrieving records: {}", e);
                let _ = write!(text, "\nSQL Error {}", e);
            }
        }

        text
    }
}
