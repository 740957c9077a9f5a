use crate::model::count_word;

/// A parsed top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    LeastPopulous,
    MostPopulous,
    NameAscending,
    NameDescending,
    MostPopulousInState,
    CitiesNamed,
    Quit,
}

impl MenuChoice {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::LeastPopulous),
            2 => Some(MenuChoice::MostPopulous),
            3 => Some(MenuChoice::NameAscending),
            4 => Some(MenuChoice::NameDescending),
            5 => Some(MenuChoice::MostPopulousInState),
            6 => Some(MenuChoice::CitiesNamed),
            9 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub(crate) const SELECTION_PROMPT: &str = "Enter selection";
pub(crate) const STATE_PROMPT: &str = "Enter state name (ie. Alabama)";
pub(crate) const CITY_PROMPT: &str = "Enter city name";
pub(crate) const FAREWELL: &str = "Thank you for using Population!";

pub(crate) fn banner() -> Vec<String> {
    [
        r"   ___                  _       _   _",
        r"  / _ \___  _ __  _   _| | __ _| |_(_) ___  _ __ ",
        r" / /_)/ _ \| '_ \| | | | |/ _` | __| |/ _ \| '_ \ ",
        r"/ ___/ (_) | |_) | |_| | | (_| | |_| | (_) | | | |",
        r"\/    \___/| .__/ \__,_|_|\__,_|\__|_|\___/|_| |_|",
        r"           |_|",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub(crate) fn menu_lines(limit: usize) -> Vec<String> {
    let count = count_word(limit);
    vec![
        format!("1. {count} least populous cities in USA (Selection Sort)"),
        format!("2. {count} most populous cities in USA (Merge Sort)"),
        format!("3. First {} cities sorted by name (Insertion Sort)", count.to_lowercase()),
        format!("4. Last {} cities sorted by name descending (Merge Sort)", count.to_lowercase()),
        format!("5. {count} most populous cities in named state"),
        "6. All cities matching a name sorted by population".to_string(),
        "9. Quit".to_string(),
    ]
}
