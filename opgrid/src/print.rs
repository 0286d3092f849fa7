//! Solution printer.

use std::io::{self, Write};

use opgrid_search::Outcome;

/// Write `outcome` in the output format: the number of cells on the path,
/// then one `row col` line per cell, counted from one. A search that found
/// nothing writes `no solution`.
pub fn write_outcome<W: Write>(w: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Found(sol) => {
            writeln!(w, "{}", sol.path.len())?;
            for (row, col) in sol.one_based() {
                writeln!(w, "{row} {col}")?;
            }
        }
        Outcome::NoPath => writeln!(w, "no solution")?,
        Outcome::OutOfBudget => writeln!(w, "no solution (step budget spent)")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opgrid_core::Point;
    use opgrid_search::{Direction, Solution};

    fn render(outcome: &Outcome) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn found_path_is_one_based() {
        let sol = Solution {
            path: vec![Point::at(0, 0), Point::at(0, 1), Point::at(1, 1)],
            direction: Direction::Forward,
            path_value: 3.0,
            goal_value: 1.0,
            cost: 0,
            meeting: None,
        };
        assert_eq!(render(&Outcome::Found(sol)), "3\n1 1\n1 2\n2 2\n");
    }

    #[test]
    fn failures_say_so() {
        assert_eq!(render(&Outcome::NoPath), "no solution\n");
        assert!(render(&Outcome::OutOfBudget).starts_with("no solution"));
    }
}
