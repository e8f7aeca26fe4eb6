/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Number of ships each side must place.
pub const NUM_SHIPS: usize = 6;

/// Deck counts of the fleet, in the order ships are placed.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1];

/// Total number of decks in a full fleet.
pub const TOTAL_DECKS: usize = 3 + 2 + 2 + 1 + 1 + 1;

/// Environment variable consulted by [`crate::init_logging`].
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Human-readable class name for a ship with `decks` decks.
pub fn ship_class_name(decks: usize) -> &'static str {
    match decks {
        3 => "three-decker",
        2 => "two-decker",
        1 => "one-decker",
        _ => "ship",
    }
}
