//! Serialization of finalized groups into the `db` command stream.
//!
//! The output is consumed by an external assembler-style data table, so every
//! token and field order is a wire contract:
//!
//! ```text
//! db <color name>                      header
//! db <N>                               segment count for the next group
//! db <x0>,<y0>,<x1>,<y1>,...           the group's vertices, one line
//! db 0                                 terminator
//! ```
//!
//! Lines are joined with a single `\n` and there is no trailing newline.

use crate::draw::Group;

/// Serializes `groups` with the given stroke color label.
///
/// Groups with fewer than two points produce no output at all; the canvas
/// never finalizes such groups, but a malformed input must not crash or emit
/// broken lines here. This function never fails.
pub fn export(groups: &[Group], color_name: &str) -> String {
    let mut lines = Vec::with_capacity(groups.len() * 2 + 2);
    lines.push(format!("db {color_name}"));

    for group in groups {
        if !group.is_drawable() {
            continue;
        }

        lines.push(format!("db {}", group.len() - 1));

        let coords: Vec<String> = group
            .points()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect();
        lines.push(format!("db {}", coords.join(",")));
    }

    lines.push("db 0".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Point;

    fn group(points: &[(i32, i32)]) -> Group {
        let mut iter = points.iter();
        let &(x, y) = iter.next().expect("test group needs a first point");
        let mut g = Group::new(Point::new(x, y));
        for &(x, y) in iter {
            g.push(Point::new(x, y));
        }
        g
    }

    #[test]
    fn empty_drawing_exports_header_and_terminator() {
        assert_eq!(export(&[], "void"), "db void\ndb 0");
    }

    #[test]
    fn single_group_exports_segment_count_and_coords() {
        let groups = vec![group(&[(0, 0), (10, 0), (10, 10)])];
        assert_eq!(
            export(&groups, "red"),
            "db red\ndb 2\ndb 0,0,10,0,10,10\ndb 0"
        );
    }

    #[test]
    fn groups_keep_insertion_order() {
        let groups = vec![group(&[(1, 1), (2, 2)]), group(&[(3, 3), (4, 4), (5, 5)])];
        assert_eq!(
            export(&groups, "green"),
            "db green\ndb 1\ndb 1,1,2,2\ndb 2\ndb 3,3,4,4,5,5\ndb 0"
        );
    }

    #[test]
    fn undersized_groups_are_skipped_entirely() {
        let groups = vec![group(&[(7, 7)]), group(&[(1, 1), (2, 2)])];
        assert_eq!(export(&groups, "void"), "db void\ndb 1\ndb 1,1,2,2\ndb 0");
    }
}
