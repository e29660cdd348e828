//! Display formatting for terminal output
//!
//! Pure formatting helpers: the shell and the CLI handlers print the
//! returned strings as-is.

use std::collections::HashMap;

/// Render the letter-frequency bar graph
///
/// One line per letter A through Z, in order. Each bar is one `*` per
/// percentage point of that letter's share of the counted total, rounded
/// half away from zero. An empty table renders every bar empty. Rounding
/// is independent per letter, so bar lengths need not sum to 100.
pub fn format_frequency_graph(freq: &HashMap<char, usize>) -> String {
    let total: usize = freq.values().sum();
    let mut out = String::new();
    for letter in 'A'..='Z' {
        let count = freq.get(&letter).copied().unwrap_or(0);
        let percentage = if total > 0 {
            ((count as f64 / total as f64) * 100.0).round() as usize
        } else {
            0
        };
        out.push_str(&format!("{}: {}\n", letter, "*".repeat(percentage)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_frequency;

    #[test]
    fn test_graph_has_one_line_per_letter() {
        let graph = format_frequency_graph(&HashMap::new());
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "A: ");
        assert_eq!(lines[25], "Z: ");
    }

    #[test]
    fn test_single_letter_gets_full_bar() {
        let freq = analyze_frequency("QQQQ");
        let graph = format_frequency_graph(&freq);
        let q_line = graph.lines().nth(16).unwrap();
        assert_eq!(q_line, format!("Q: {}", "*".repeat(100)));
    }

    #[test]
    fn test_percentages_round_half_away_from_zero() {
        // 10 letters total, L occurs 3 times: 30%. H occurs once: 10%.
        let freq = analyze_frequency("Hello, World!");
        let graph = format_frequency_graph(&freq);
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(lines[11], format!("L: {}", "*".repeat(30)));
        assert_eq!(lines[7], format!("H: {}", "*".repeat(10)));
        assert_eq!(lines[25], "Z: ");

        // 1 of 8 letters is 12.5%, which rounds up to 13.
        let freq = analyze_frequency("AAAAAAAB");
        let graph = format_frequency_graph(&freq);
        let b_line = graph.lines().nth(1).unwrap();
        assert_eq!(b_line, format!("B: {}", "*".repeat(13)));
    }

    #[test]
    fn test_absent_letters_render_empty_bars() {
        let freq = analyze_frequency("ABBA");
        let graph = format_frequency_graph(&freq);
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(lines[0], format!("A: {}", "*".repeat(50)));
        assert_eq!(lines[1], format!("B: {}", "*".repeat(50)));
        assert_eq!(lines[2], "C: ");
    }
}
