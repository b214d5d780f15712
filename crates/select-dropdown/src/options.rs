//! Option model for the dropdown.
//!
//! Raw option input arrives in one of three shapes: an explicit ordered
//! `value -> text` map, an explicit list of groups, or a declarative list of
//! `option`/`optgroup` children. [`OptionModel::build`] normalizes all of
//! them into one canonical structure: an ordered sequence of
//! [`OptionGroup`]s, each holding an ordered map of [`SelectOption`]s keyed
//! by value.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use select_dropdown::options::{OptionModel, OptionSource};
//!
//! let mut map = IndexMap::new();
//! map.insert("day".to_string(), "Day".to_string());
//! map.insert("month".to_string(), "Month".to_string());
//!
//! let model = OptionModel::build(OptionSource::ExplicitMap(&map), false);
//! assert_eq!(model.groups().len(), 1);
//! assert_eq!(model.find("month").map(|o| o.text.as_str()), Some("Month"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use select_dropdown_core::logging::{span_names, targets};
use select_dropdown_core::PerfSpan;

// ============================================================================
// Canonical model
// ============================================================================

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// The identity key of the option.
    pub value: String,
    /// The display label.
    pub text: String,
    /// Disabled options are listed but cannot be picked.
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            disabled: false,
        }
    }

    /// Set the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A labelled (or root) group of options.
///
/// Options keep insertion order. Inserting a value that is already present
/// replaces the entry but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct OptionGroup {
    label: Option<String>,
    options: IndexMap<String, SelectOption>,
}

impl OptionGroup {
    /// Create the ungrouped root group.
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a group with an optional header label.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            options: IndexMap::new(),
        }
    }

    /// Create a labelled group.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self::new(Some(label.into()))
    }

    /// Add an option using builder pattern.
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.insert(option);
        self
    }

    /// Insert an option, keyed by its value.
    pub fn insert(&mut self, option: SelectOption) {
        self.options.insert(option.value.clone(), option);
    }

    /// The group header, or `None` for the root group.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether this is the ungrouped root group.
    pub fn is_root(&self) -> bool {
        self.label.is_none()
    }

    /// Look up an option by value.
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.options.get(value)
    }

    /// Iterate over the options in order.
    pub fn options(&self) -> impl ExactSizeIterator<Item = &SelectOption> + '_ {
        self.options.values()
    }

    /// Number of options in the group.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the group holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// The canonical option model: an ordered sequence of groups.
///
/// Equality is order-sensitive; see [`crate::equality`].
#[derive(Debug, Clone, Default)]
pub struct OptionModel {
    groups: Vec<OptionGroup>,
}

impl OptionModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from already-canonical groups.
    ///
    /// No empty-group filtering is applied.
    pub fn from_groups(groups: Vec<OptionGroup>) -> Self {
        Self { groups }
    }

    /// Normalize raw option input into a canonical model.
    ///
    /// Groups left without options are dropped unless `allow_empty_groups`
    /// is set. This is a pure function of its inputs.
    pub fn build(source: OptionSource<'_>, allow_empty_groups: bool) -> Self {
        let _perf = PerfSpan::new(span_names::BUILD);

        let groups = match source {
            OptionSource::ExplicitMap(map) => {
                let mut root = OptionGroup::root();
                for (value, text) in map {
                    root.insert(SelectOption::new(value.clone(), text.clone()));
                }
                vec![root]
            }
            OptionSource::Grouped(specs) => specs.iter().map(GroupSpec::to_group).collect(),
            OptionSource::Declarative(children) => groups_from_children(children),
            OptionSource::Empty => Vec::new(),
        };

        let total = groups.len();
        let groups: Vec<OptionGroup> = groups
            .into_iter()
            .filter(|group| allow_empty_groups || !group.is_empty())
            .collect();

        tracing::debug!(
            target: targets::OPTIONS,
            shape = source.shape(),
            groups = groups.len(),
            dropped = total - groups.len(),
            "built option model"
        );

        Self { groups }
    }

    /// The groups in order.
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Whether the model has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of options across all groups.
    pub fn option_count(&self) -> usize {
        self.groups.iter().map(OptionGroup::len).sum()
    }

    /// Iterate over every option, group by group.
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> + '_ {
        self.groups.iter().flat_map(OptionGroup::options)
    }

    /// Find an option by value.
    ///
    /// When the same value appears in several groups, the first group in
    /// sequence order wins.
    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.groups.iter().find_map(|group| group.get(value))
    }

    /// Whether any group contains `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }
}

// ============================================================================
// Raw input shapes
// ============================================================================

/// Raw option input, resolved once at the configuration boundary.
#[derive(Debug, Clone, Copy)]
pub enum OptionSource<'a> {
    /// An ordered `value -> text` map; becomes a single root group.
    ExplicitMap(&'a IndexMap<String, String>),
    /// An ordered list of groups, used as-is.
    Grouped(&'a [GroupSpec]),
    /// Declarative `option`/`optgroup` children.
    Declarative(&'a [Child]),
    /// Nothing supplied; builds an empty model.
    Empty,
}

impl OptionSource<'_> {
    fn shape(&self) -> &'static str {
        match self {
            Self::ExplicitMap(_) => "map",
            Self::Grouped(_) => "grouped",
            Self::Declarative(_) => "declarative",
            Self::Empty => "empty",
        }
    }
}

/// The explicit `options` value of a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionsSpec {
    /// `value -> text`, all in the root group.
    Map(IndexMap<String, String>),
    /// A list of `{ group, options }` entries.
    Grouped(Vec<GroupSpec>),
}

impl OptionsSpec {
    /// Borrow this spec as an [`OptionSource`].
    pub fn as_source(&self) -> OptionSource<'_> {
        match self {
            Self::Map(map) => OptionSource::ExplicitMap(map),
            Self::Grouped(groups) => OptionSource::Grouped(groups),
        }
    }
}

impl From<IndexMap<String, String>> for OptionsSpec {
    fn from(map: IndexMap<String, String>) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<GroupSpec>> for OptionsSpec {
    fn from(groups: Vec<GroupSpec>) -> Self {
        Self::Grouped(groups)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for OptionsSpec {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(value, text)| (value.to_string(), text.to_string()))
                .collect(),
        )
    }
}

/// One entry of the grouped shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Group header; `None` for the root group.
    #[serde(default)]
    pub group: Option<String>,
    /// Ordered `value -> entry` map.
    #[serde(default)]
    pub options: IndexMap<String, OptionEntry>,
}

impl GroupSpec {
    /// Create a group spec with an optional label.
    pub fn new(group: Option<&str>) -> Self {
        Self {
            group: group.map(str::to_string),
            options: IndexMap::new(),
        }
    }

    /// Add an entry using builder pattern.
    pub fn with_option(mut self, value: impl Into<String>, entry: impl Into<OptionEntry>) -> Self {
        self.options.insert(value.into(), entry.into());
        self
    }

    fn to_group(&self) -> OptionGroup {
        let mut group = OptionGroup::new(self.group.clone());
        for (value, entry) in &self.options {
            group.insert(
                SelectOption::new(value.clone(), entry.text()).with_disabled(entry.is_disabled()),
            );
        }
        group
    }
}

/// An option entry in the grouped shape: bare text or text plus flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    /// Just the display text.
    Text(String),
    /// Display text with a disabled flag.
    Full {
        text: String,
        #[serde(default)]
        disabled: bool,
    },
}

impl OptionEntry {
    /// Create a disabled entry.
    pub fn disabled(text: impl Into<String>) -> Self {
        Self::Full {
            text: text.into(),
            disabled: true,
        }
    }

    /// The display text.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Full { text, .. } => text,
        }
    }

    /// Whether the entry is disabled.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Full { disabled: true, .. })
    }
}

impl From<&str> for OptionEntry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for OptionEntry {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ============================================================================
// Declarative children
// ============================================================================

/// A declarative child of the dropdown, like `<option>` or `<optgroup>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawChild", into = "RawChild")]
pub enum Child {
    /// A single option.
    Option {
        value: String,
        text: String,
        disabled: bool,
    },
    /// A labelled group of option children.
    OptGroup { label: String, children: Vec<Child> },
    /// Anything else. Not allowed; reported and skipped during build.
    Unknown { kind: String },
}

impl Child {
    /// An enabled option child.
    pub fn option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Option {
            value: value.into(),
            text: text.into(),
            disabled: false,
        }
    }

    /// A disabled option child.
    pub fn disabled_option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Option {
            value: value.into(),
            text: text.into(),
            disabled: true,
        }
    }

    /// An optgroup child.
    pub fn optgroup(label: impl Into<String>, children: Vec<Child>) -> Self {
        Self::OptGroup {
            label: label.into(),
            children,
        }
    }

    /// A child of an unsupported kind.
    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::Unknown { kind: kind.into() }
    }

    fn kind(&self) -> &str {
        match self {
            Self::Option { .. } => "option",
            Self::OptGroup { .. } => "optgroup",
            Self::Unknown { kind } => kind,
        }
    }

    fn to_option(&self) -> Option<SelectOption> {
        match self {
            Self::Option {
                value,
                text,
                disabled,
            } => Some(SelectOption::new(value.clone(), text.clone()).with_disabled(*disabled)),
            _ => None,
        }
    }
}

/// Wire form of [`Child`]: a `type` tag plus optional fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawChild {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    disabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<RawChild>,
}

impl From<RawChild> for Child {
    fn from(raw: RawChild) -> Self {
        match raw.kind.as_str() {
            "option" => {
                let text = raw.text.unwrap_or_default();
                // Like HTML, an option without a value is keyed by its text.
                let value = raw.value.unwrap_or_else(|| text.clone());
                Self::Option {
                    value,
                    text,
                    disabled: raw.disabled,
                }
            }
            "optgroup" => Self::OptGroup {
                label: raw.label.unwrap_or_default(),
                children: raw.children.into_iter().map(Child::from).collect(),
            },
            _ => Self::Unknown { kind: raw.kind },
        }
    }
}

impl From<Child> for RawChild {
    fn from(child: Child) -> Self {
        match child {
            Child::Option {
                value,
                text,
                disabled,
            } => Self {
                kind: "option".to_string(),
                value: Some(value),
                text: Some(text),
                disabled,
                ..Default::default()
            },
            Child::OptGroup { label, children } => Self {
                kind: "optgroup".to_string(),
                label: Some(label),
                children: children.into_iter().map(RawChild::from).collect(),
                ..Default::default()
            },
            Child::Unknown { kind } => Self {
                kind,
                ..Default::default()
            },
        }
    }
}

/// Derive groups from declarative children.
///
/// The root group always comes first; each optgroup appends a new group.
fn groups_from_children(children: &[Child]) -> Vec<OptionGroup> {
    let mut root = OptionGroup::root();
    let mut groups = Vec::new();

    for child in children {
        match child {
            Child::Option { .. } => {
                if let Some(option) = child.to_option() {
                    root.insert(option);
                }
            }
            Child::OptGroup { children, .. } if children.is_empty() => {
                tracing::trace!(target: targets::OPTIONS, "skipping optgroup without children");
            }
            Child::OptGroup { label, children } => {
                let mut group = OptionGroup::labelled(label.clone());
                for member in children {
                    match member.to_option() {
                        Some(option) => group.insert(option),
                        None => report_invalid_child(member, Some(label)),
                    }
                }
                groups.push(group);
            }
            Child::Unknown { .. } => report_invalid_child(child, None),
        }
    }

    groups.insert(0, root);
    groups
}

fn report_invalid_child(child: &Child, group: Option<&str>) {
    tracing::error!(
        target: targets::OPTIONS,
        kind = child.kind(),
        group = group.unwrap_or(""),
        "expected children as option or optgroup elements; ignoring child"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(v, t)| (v.to_string(), t.to_string()))
            .collect()
    }

    fn values(group: &OptionGroup) -> Vec<&str> {
        group.options().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_build_explicit_map() {
        let options = map(&[("a", "A"), ("b", "B")]);
        let model = OptionModel::build(OptionSource::ExplicitMap(&options), false);

        assert_eq!(model.groups().len(), 1);
        let root = &model.groups()[0];
        assert!(root.is_root());
        assert_eq!(values(root), vec!["a", "b"]);
        assert_eq!(root.get("b"), Some(&SelectOption::new("b", "B")));
    }

    #[test]
    fn test_build_explicit_map_keeps_insertion_order() {
        let options = map(&[("z", "Z"), ("a", "A"), ("m", "M")]);
        let model = OptionModel::build(OptionSource::ExplicitMap(&options), false);
        assert_eq!(values(&model.groups()[0]), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_build_empty_map_drops_root() {
        let options = IndexMap::new();
        let model = OptionModel::build(OptionSource::ExplicitMap(&options), false);
        assert!(model.is_empty());

        let model = OptionModel::build(OptionSource::ExplicitMap(&options), true);
        assert_eq!(model.groups().len(), 1);
    }

    #[test]
    fn test_build_grouped_drops_empty_groups() {
        let specs = vec![
            GroupSpec::new(Some("G1")).with_option("a", "A"),
            GroupSpec::new(None),
        ];
        let model = OptionModel::build(OptionSource::Grouped(&specs), false);

        assert_eq!(model.groups().len(), 1);
        assert_eq!(model.groups()[0].label(), Some("G1"));
        assert_eq!(values(&model.groups()[0]), vec!["a"]);
    }

    #[test]
    fn test_build_grouped_allow_empty_groups() {
        let specs = vec![
            GroupSpec::new(Some("G1")).with_option("a", "A"),
            GroupSpec::new(Some("Empty")),
        ];
        let model = OptionModel::build(OptionSource::Grouped(&specs), true);

        assert_eq!(model.groups().len(), 2);
        assert!(model.groups()[1].is_empty());
    }

    #[test]
    fn test_build_grouped_disabled_flags() {
        let specs = vec![GroupSpec::new(None)
            .with_option("a", "A")
            .with_option("b", OptionEntry::disabled("B"))];
        let model = OptionModel::build(OptionSource::Grouped(&specs), false);

        assert!(!model.find("a").unwrap().disabled);
        assert!(model.find("b").unwrap().disabled);
    }

    #[test]
    fn test_build_declarative() {
        let children = vec![
            Child::option("day", "Day"),
            Child::optgroup(
                "Long",
                vec![Child::option("month", "Month"), Child::disabled_option("year", "Year")],
            ),
            Child::option("week", "Week"),
        ];
        let model = OptionModel::build(OptionSource::Declarative(&children), false);

        assert_eq!(model.groups().len(), 2);
        assert!(model.groups()[0].is_root());
        assert_eq!(values(&model.groups()[0]), vec!["day", "week"]);
        assert_eq!(model.groups()[1].label(), Some("Long"));
        assert_eq!(values(&model.groups()[1]), vec!["month", "year"]);
        assert!(model.find("year").unwrap().disabled);
    }

    #[test]
    fn test_build_declarative_root_dropped_when_empty() {
        let children = vec![Child::optgroup("G", vec![Child::option("a", "A")])];
        let model = OptionModel::build(OptionSource::Declarative(&children), false);

        assert_eq!(model.groups().len(), 1);
        assert_eq!(model.groups()[0].label(), Some("G"));

        let model = OptionModel::build(OptionSource::Declarative(&children), true);
        assert_eq!(model.groups().len(), 2);
        assert!(model.groups()[0].is_root());
    }

    #[test]
    fn test_build_declarative_skips_childless_optgroup() {
        let children = vec![Child::option("a", "A"), Child::optgroup("Empty", vec![])];
        let model = OptionModel::build(OptionSource::Declarative(&children), true);

        assert_eq!(model.groups().len(), 1);
        assert!(model.groups()[0].is_root());
    }

    #[test]
    fn test_build_declarative_skips_unknown_children() {
        let children = vec![
            Child::option("a", "A"),
            Child::unknown("div"),
            Child::optgroup("G", vec![Child::unknown("span"), Child::option("b", "B")]),
        ];
        let model = OptionModel::build(OptionSource::Declarative(&children), false);

        assert_eq!(model.option_count(), 2);
        assert!(model.contains("a"));
        assert!(model.contains("b"));
    }

    #[test]
    fn test_build_empty_source() {
        let model = OptionModel::build(OptionSource::Empty, true);
        assert!(model.is_empty());
        assert_eq!(model.option_count(), 0);
    }

    #[test]
    fn test_find_first_group_wins() {
        let specs = vec![
            GroupSpec::new(Some("G1")).with_option("dup", "First"),
            GroupSpec::new(Some("G2")).with_option("dup", "Second"),
        ];
        let model = OptionModel::build(OptionSource::Grouped(&specs), false);

        assert_eq!(model.find("dup").map(|o| o.text.as_str()), Some("First"));
        assert_eq!(model.find("missing"), None);
    }

    #[test]
    fn test_duplicate_in_group_keeps_position() {
        let children = vec![
            Child::option("a", "A"),
            Child::option("b", "B"),
            Child::option("a", "A2"),
        ];
        let model = OptionModel::build(OptionSource::Declarative(&children), false);

        assert_eq!(values(&model.groups()[0]), vec!["a", "b"]);
        assert_eq!(model.find("a").map(|o| o.text.as_str()), Some("A2"));
    }

    #[test]
    fn test_child_deserialize() {
        let json = r#"[
            {"type": "option", "value": "a", "text": "A"},
            {"type": "option", "text": "Plain"},
            {"type": "optgroup", "label": "G", "children": [
                {"type": "option", "value": "b", "text": "B", "disabled": true}
            ]},
            {"type": "hr"}
        ]"#;
        let children: Vec<Child> = serde_json::from_str(json).unwrap();

        assert_eq!(children[0], Child::option("a", "A"));
        assert_eq!(children[1], Child::option("Plain", "Plain"));
        assert_eq!(
            children[2],
            Child::optgroup("G", vec![Child::disabled_option("b", "B")])
        );
        assert_eq!(children[3], Child::unknown("hr"));
    }

    #[test]
    fn test_options_spec_deserialize_shapes() {
        let spec: OptionsSpec = serde_json::from_str(r#"{"b": "B", "a": "A"}"#).unwrap();
        match spec {
            OptionsSpec::Map(map) => {
                assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
            }
            other => panic!("expected map, got {other:?}"),
        }

        let spec: OptionsSpec = serde_json::from_str(
            r#"[{"group": "G", "options": {"a": "A", "b": {"text": "B", "disabled": true}}}]"#,
        )
        .unwrap();
        match spec {
            OptionsSpec::Grouped(groups) => {
                assert_eq!(groups[0].group.as_deref(), Some("G"));
                assert!(groups[0].options["b"].is_disabled());
                assert_eq!(groups[0].options["a"].text(), "A");
            }
            other => panic!("expected groups, got {other:?}"),
        }
    }
}
