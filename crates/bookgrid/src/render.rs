use bookgrid_core::books::BookCard;
use bookgrid_core::pagination::link_window;
use colored::Colorize;

use crate::prelude::new_table;

/// The book grid for one page: one row per record, keyed by the record's key.
pub fn book_table(cards: &[BookCard]) -> prettytable::Table {
    let mut table = new_table();

    table.add_row(prettytable::row![
        "Key".green().bold(),
        "Title".green().bold(),
        "Author".green().bold(),
        "Year".green().bold(),
        "Cover".green().bold()
    ]);

    for card in cards {
        table.add_row(prettytable::row![
            card.key.bright_black(),
            card.title.white().bold(),
            card.author.bright_white(),
            card.year.map(|y| y.to_string()).unwrap_or_default(),
            card.cover_url.cyan()
        ]);
    }

    table
}

/// The pagination bar: a previous control, the sliding window of numbered
/// links with the current page marked active, and a next control.
///
/// Controls at the absorbing boundaries render dimmed; an empty result set
/// renders no bar at all.
pub fn pagination_bar(current: usize, total: usize) -> String {
    let links = link_window(current, total);
    if links.is_empty() {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::with_capacity(links.len() + 2);

    parts.push(if current > 1 {
        "<<".cyan().to_string()
    } else {
        "<<".bright_black().to_string()
    });

    for page in links {
        if page == current {
            parts.push(format!("[{page}]").yellow().bold().to_string());
        } else {
            parts.push(page.to_string().cyan().to_string());
        }
    }

    parts.push(if current < total {
        ">>".cyan().to_string()
    } else {
        ">>".bright_black().to_string()
    });

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_card(n: usize) -> BookCard {
        BookCard {
            key: format!("/works/OL{n}W"),
            title: format!("Book {n}"),
            author: format!("Author {n}"),
            cover_url: format!("https://covers.openlibrary.org/b/olid/OL{n}M-M.jpg"),
            year: Some(1954),
        }
    }

    #[test]
    fn test_book_table_one_row_per_card() {
        colored::control::set_override(false);
        let cards = vec![create_test_card(1), create_test_card(2)];

        let rendered = book_table(&cards).to_string();

        assert!(rendered.contains("/works/OL1W"));
        assert!(rendered.contains("Book 1"));
        assert!(rendered.contains("Author 2"));
        assert!(rendered.contains("1954"));
        assert!(rendered.contains("https://covers.openlibrary.org/b/olid/OL2M-M.jpg"));
    }

    #[test]
    fn test_book_table_missing_year() {
        colored::control::set_override(false);
        let mut card = create_test_card(1);
        card.year = None;

        let rendered = book_table(&[card]).to_string();

        assert!(rendered.contains("Book 1"));
        assert!(!rendered.contains("1954"));
    }

    #[test]
    fn test_pagination_bar_middle_page() {
        colored::control::set_override(false);
        assert_eq!(pagination_bar(5, 10), "<< 3 4 [5] 6 7 >>");
    }

    #[test]
    fn test_pagination_bar_first_page() {
        colored::control::set_override(false);
        assert_eq!(pagination_bar(1, 3), "<< [1] 2 3 >>");
    }

    #[test]
    fn test_pagination_bar_last_page() {
        colored::control::set_override(false);
        assert_eq!(pagination_bar(10, 10), "<< 8 9 [10] >>");
    }

    #[test]
    fn test_pagination_bar_empty() {
        assert_eq!(pagination_bar(1, 0), "");
    }

    #[test]
    fn test_pagination_bar_exactly_one_active_marker() {
        colored::control::set_override(false);
        for total in 1..12 {
            for current in 1..=total {
                let bar = pagination_bar(current, total);
                assert_eq!(bar.matches('[').count(), 1, "bar: {bar}");
                assert!(bar.contains(&format!("[{current}]")));
            }
        }
    }
}
