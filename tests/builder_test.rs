//! Tests for ChartDef parsing and ChartBuilder

use rstest::rstest;

use orgchart::domain::{
    sample, ChartBuilder, ChartDef, CollectVisitor, DomainError, NodeKind, SearchVisitor,
    DEFAULT_MAX_DEPTH,
};

const CHART: &str = r#"
name = "M"

[[faculties]]
name = "Sci"

[[faculties.departments]]
name = "CS"
committees = [{ name = "MSc", committees = [{ name = "Web" }] }]

[[faculties.committees]]
name = "Admin"

[[faculties]]
name = "Arts"
"#;

#[test]
fn given_toml_chart_when_building_then_tree_keeps_definition_order() {
    // Arrange
    let def = ChartDef::from_toml(CHART).unwrap();

    // Act
    let university = ChartBuilder::default().build(&def).unwrap();

    // Assert
    let mut collector = CollectVisitor::new();
    university.accept(&mut collector);
    assert_eq!(
        collector.names(),
        vec!["M", "Sci", "CS", "MSc", "Web", "Admin", "Arts"]
    );
}

#[test]
fn given_toml_chart_when_searching_then_finds_nested_committee() {
    let def = ChartDef::from_toml(CHART).unwrap();
    let university = ChartBuilder::default().build(&def).unwrap();

    let mut searcher = SearchVisitor::new("Web");
    university.accept(&mut searcher);

    assert_eq!(searcher.result().map(|c| c.name()), Some("Web"));
}

#[rstest]
#[case("name = \"\"\n", NodeKind::University)]
#[case("name = \"U\"\n[[faculties]]\nname = \"  \"\n", NodeKind::Faculty)]
#[case(
    "name = \"U\"\n[[faculties]]\nname = \"F\"\n[[faculties.departments]]\nname = \"\"\n",
    NodeKind::Department
)]
#[case(
    "name = \"U\"\n[[faculties]]\nname = \"F\"\n[[faculties.committees]]\nname = \"C\"\ncommittees = [{ name = \"\" }]\n",
    NodeKind::Committee
)]
fn given_blank_name_when_building_then_errors_with_kind(
    #[case] content: &str,
    #[case] kind: NodeKind,
) {
    let def = ChartDef::from_toml(content).unwrap();

    let err = ChartBuilder::default().build(&def).unwrap_err();

    assert_eq!(err, DomainError::EmptyName { kind });
}

#[test]
fn given_malformed_toml_when_parsing_then_errors() {
    let result = ChartDef::from_toml("name = [unclosed");
    assert!(matches!(
        result,
        Err(DomainError::InvalidDefinition { .. })
    ));
}

#[test]
fn given_deep_nesting_when_building_with_small_limit_then_errors() {
    // Arrange: MSc (level 1) -> Web (level 2)
    let def = ChartDef::from_toml(CHART).unwrap();

    // Act
    let err = ChartBuilder::new(1).build(&def).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::DepthExceeded {
            name: "Web".into(),
            limit: 1
        }
    );
}

#[test]
fn given_sample_chart_when_converting_to_definition_and_back_then_structure_is_preserved() {
    let chart = sample::mcgill();

    let toml = ChartDef::from(&chart).to_toml().unwrap();
    let rebuilt = ChartBuilder::default()
        .build(&ChartDef::from_toml(&toml).unwrap())
        .unwrap();

    assert_eq!(rebuilt, chart);
}

/// Chart nesting committees `levels` deep as `[[...committees]]` tables.
fn table_nested_chart(levels: usize) -> String {
    let mut toml = String::from("name = \"M\"\n\n[[faculties]]\nname = \"F\"\n");
    let mut header = String::from("faculties");
    for level in 1..=levels {
        header.push_str(".committees");
        toml.push_str(&format!("\n[[{}]]\nname = \"c{}\"\n", header, level));
    }
    toml
}

#[test]
fn given_table_nesting_beyond_default_limit_when_building_then_depth_exceeded() {
    // Arrange
    let def = ChartDef::from_toml(&table_nested_chart(DEFAULT_MAX_DEPTH + 1))
        .expect("table nesting parses");

    // Act
    let err = ChartBuilder::default().build(&def).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::DepthExceeded {
            name: format!("c{}", DEFAULT_MAX_DEPTH + 1),
            limit: DEFAULT_MAX_DEPTH
        }
    );
}

#[test]
fn given_table_nesting_at_default_limit_when_building_then_succeeds() {
    let def = ChartDef::from_toml(&table_nested_chart(DEFAULT_MAX_DEPTH)).unwrap();

    let university = ChartBuilder::default().build(&def).unwrap();

    let mut collect = CollectVisitor::new();
    university.accept(&mut collect);
    assert_eq!(collect.visited().len(), DEFAULT_MAX_DEPTH + 2);
}
