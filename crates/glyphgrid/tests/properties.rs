use glyphgrid::prelude::*;
use glyphgrid_test_utils::{assert_degree_matches_slots, assert_links_symmetric, assert_shape_matches};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9#.]{1,10}",
        prop::collection::vec("[A-Za-z0-9#. ]{0,10}", 0..10),
    )
        .prop_map(|(first, rest)| {
            let mut rows = vec![first];
            rows.extend(rest);
            rows.join("\n")
        })
}

proptest! {
    #[test]
    fn parsed_links_are_symmetric(text in text_strategy()) {
        let l = glyphgrid::parse(&text).unwrap();
        assert_links_symmetric(&l);
    }

    #[test]
    fn adjacent_count_matches_slots(text in text_strategy()) {
        let l = glyphgrid::parse(&text).unwrap();
        assert_degree_matches_slots(&l);
    }

    #[test]
    fn shape_follows_rows(text in text_strategy()) {
        let grid = AsciiGrid::new();
        let l = grid.parse(&text).unwrap();
        assert_shape_matches(&l, &grid.rows(&text));
    }

    #[test]
    fn rectangular_corners_have_degree_two(w in 2usize..8, h in 2usize..8) {
        let row = ".".repeat(w);
        let text = vec![row; h].join("\n");
        let l = glyphgrid::parse(&text).unwrap();
        prop_assert_eq!(l.len(), w * h);
        prop_assert_eq!(l.cells().filter(|c| c.degree() == 2).count(), 4);
        prop_assert_eq!(l.cells().filter(|c| c.degree() == 4).count(), (w - 2) * (h - 2));
    }

    #[test]
    fn writes_are_visible_from_neighbours(w in 2usize..6, h in 2usize..6, x in 0usize..6, y in 0usize..6) {
        let (x, y) = (x % w, y % h);
        let text = vec!["a".repeat(w); h].join("\n");
        let mut l = glyphgrid::parse(&text).unwrap();
        let id = l.cell_at(x, y).unwrap().id();
        l.set_contents(id, 'z');
        let cell = l.cell(id).unwrap();
        for n in cell.adjacent_cells() {
            let back = Direction::ALL
                .into_iter()
                .find_map(|d| n.neighbor(d).filter(|c| c.id() == id))
                .unwrap();
            prop_assert_eq!(*back.contents(), 'z');
        }
        prop_assert_eq!(l.cells().filter(|c| *c.contents() == 'z').count(), 1);
    }
}
