//! Integration tests for typsmith document assembly

use typsmith::{
    Cell, Document, Enumerate, Figure, Frame, Heading, Image, Index, Itemize, MultiIndex,
    Renderable, Table, TableLine,
};

fn simple_frame() -> Frame {
    Frame::new(
        Index::flat(["A", "B", "C"]),
        Index::flat([0, 1, 2]),
        vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]],
    )
    .unwrap()
}

// ============================================================================
// Table rendering end to end
// ============================================================================

mod tables {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_table_render() {
        let table = Table::from_source(&simple_frame()).unwrap();
        assert_eq!(
            table.render(),
            "#table(\n  columns: 4,\n  table.header[][A][B][C],\
             \n  [0], [1], [4], [7],\
             \n  [1], [2], [5], [8],\
             \n  [2], [3], [6], [9]\n)"
        );
    }

    #[test]
    fn test_styled_table_render() {
        let mut table = Table::from_source(&simple_frame()).unwrap();
        table.set_stroke([("top", "1pt"), ("bottom", "2pt")]).unwrap();
        table.set_align("center").unwrap();
        table.add_line(TableLine::horizontal(1).with_stroke("red"));
        assert_eq!(
            table.render(),
            "#table(\n  columns: 4,\
             \n  stroke: (top: 1pt, bottom: 2pt),\
             \n  align: center,\
             \n  table.hline(y: 1, stroke: red),\
             \n  table.header[][A][B][C],\
             \n  [0], [1], [4], [7],\
             \n  [1], [2], [5], [8],\
             \n  [2], [3], [6], [9]\n)"
        );
    }

    #[test]
    fn test_hierarchical_row_index_render() {
        let index = Index::Multi(
            MultiIndex::new(
                vec![
                    vec!["A".into(), "B".into()],
                    vec!["X".into(), "Y".into()],
                ],
                vec![vec![0, 0, 1, 1], vec![0, 1, 0, 1]],
            )
            .unwrap(),
        );
        let frame = Frame::new(
            Index::flat([0, 1]),
            index,
            vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]],
        )
        .unwrap();
        let table = Table::from_source(&frame).unwrap();
        assert_eq!(
            table.render(),
            "#table(\n  columns: 4,\
             \n  table.header[#table.cell(colspan: 2)[]][0][1],\
             \n  [#table.cell(rowspan: 2)[A]], [X], [1], [2],\
             \n  [Y], [3], [4],\
             \n  [#table.cell(rowspan: 2)[B]], [X], [5], [6],\
             \n  [Y], [7], [8]\n)"
        );
    }

    #[test]
    fn test_render_twice_is_stable() {
        let mut table = Table::from_source(&simple_frame()).unwrap();
        table.set_fill("gray").unwrap();
        table.add_hline(2);
        let first = table.render();
        let second = table.render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_matches_render() {
        let table = Table::from_source(&simple_frame()).unwrap();
        assert_eq!(format!("{}", table), table.render());
    }

    #[test]
    fn test_nested_list_inside_cell() {
        let cell = Cell::new(Itemize::from_items(["a", "b"]));
        assert_eq!(cell.render(), "[- a\n- b]");
    }
}

// ============================================================================
// Element composition
// ============================================================================

mod elements {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_figure_wrapping_table() {
        let table = Table::from_source(&simple_frame()).unwrap();
        let figure = Figure::new(&table).with_caption("[Results]");
        assert_eq!(
            figure.render(),
            "#figure(\n  table(\n    columns: 4,\n    table.header[][A][B][C],\
             \n    [0], [1], [4], [7],\
             \n    [1], [2], [5], [8],\
             \n    [2], [3], [6], [9]\n  ),\n  caption: [Results]\n)"
        );
    }

    #[test]
    fn test_figure_wrapping_image() {
        let image = Image::new("chart.png").with_width("80%");
        let figure = Figure::new(&image).with_caption("[Chart]");
        assert_eq!(
            figure.render(),
            "#figure(\n  image(\"chart.png\", width: 80%),\n  caption: [Chart]\n)"
        );
    }

    #[test]
    fn test_heading_forms() {
        assert_eq!(
            Heading::new("Intro").with_level(2).unwrap().render(),
            "== Intro"
        );
        assert_eq!(
            Heading::new("\"Intro\"")
                .with_depth(1)
                .unwrap()
                .with_numbering("\"1.1\"")
                .render(),
            "#heading(\"Intro\", depth: 1, numbering: \"1.1\")"
        );
    }

    #[test]
    fn test_deeply_nested_lists() {
        let mut inner = Enumerate::from_items(["one", "two"]);
        inner.add(Itemize::from_items(["deep"]));
        let mut outer = Itemize::from_items(["top"]);
        outer.add(inner);
        assert_eq!(
            outer.render(),
            "- top\n  + one\n  + two\n    - deep"
        );
    }
}

// ============================================================================
// Document assembly
// ============================================================================

mod documents {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_report_assembly() {
        let heading = Heading::new("Measurements").with_level(1).unwrap();
        let table = Table::from_source(&simple_frame()).unwrap();
        let figure = Figure::new(&table).with_caption("[All measurements]");

        let mut doc = Document::new(format!("{}\n\n{}", heading.render(), figure.render()));
        doc.add_import("template.typ", ["conf"]).unwrap();

        let source = doc.render();
        assert!(source.starts_with("#import \"template.typ\": conf\n\n= Measurements\n\n#figure("));
        assert!(source.contains("table.header[][A][B][C]"));
        assert!(source.contains("caption: [All measurements]"));
    }

    #[test]
    fn test_document_without_imports() {
        let doc = Document::new("Just text");
        assert_eq!(doc.render(), "Just text");
    }

    #[test]
    fn test_renderable_element_as_body() {
        let list = Itemize::from_items(["a", "b"]);
        let doc = Document::new(&list);
        assert_eq!(doc.render(), "- a\n- b");
    }
}
