use crate::runtime::event::OverlayEvent;
use crate::runtime::intent::Intent;
use crate::runtime::state::OverlaySession;

/// Applies one intent to a session and returns the transition outputs.
pub struct Reducer;

impl Reducer {
    pub fn reduce(session: &mut OverlaySession, intent: Intent) -> Vec<OverlayEvent> {
        match intent {
            Intent::Choose(key) => session.choose(&key),
            Intent::SetFilter(text) => session.set_filter(text),
            Intent::SetField { key, value } => session.set_field(&key, value),
            Intent::Save => session.save(),
            Intent::Cancel => session.cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Reducer;
    use crate::core::EditorKey;
    use crate::core::field::ConfigurationField;
    use crate::core::model::ConfigurationEditorModel;
    use crate::core::stored::StoredValue;
    use crate::core::value::ConfigMap;
    use crate::runtime::config::{OverlayConfig, OverlayMode, OverlaySize};
    use crate::runtime::event::OverlayEvent;
    use crate::runtime::intent::Intent;
    use crate::runtime::state::{CloseReason, OverlaySession, Stage};

    fn field(key: &str) -> ConfigurationField {
        ConfigurationField::new(key, key, "text")
    }

    fn model(key: &str, name: &str, fields: Vec<ConfigurationField>) -> ConfigurationEditorModel {
        ConfigurationEditorModel {
            key: EditorKey::new(key),
            name: name.to_string(),
            icon: "icon-document".to_string(),
            fields,
            ..Default::default()
        }
    }

    fn stored(key: &str, entries: &[(&str, serde_json::Value)]) -> StoredValue {
        StoredValue::new(
            EditorKey::new(key),
            entries
                .iter()
                .map(|(field, value)| (field.to_string(), value.clone()))
                .collect(),
        )
    }

    fn submitted(events: &[OverlayEvent]) -> Option<&StoredValue> {
        events.iter().find_map(|event| match event {
            OverlayEvent::Submitted(value) => Some(value),
            _ => None,
        })
    }

    #[test]
    fn round_trip_collects_exactly_the_entered_values() {
        let config = OverlayConfig {
            items: vec![
                model("item", "Item", vec![field("a"), field("b")]),
                model("other", "Other", vec![field("c")]),
            ],
            ..Default::default()
        };
        let (mut session, _) = OverlaySession::start(config, None);

        Reducer::reduce(&mut session, Intent::Choose(EditorKey::new("item")));
        Reducer::reduce(
            &mut session,
            Intent::SetField {
                key: "a".to_string(),
                value: json!("x"),
            },
        );
        Reducer::reduce(
            &mut session,
            Intent::SetField {
                key: "b".to_string(),
                value: json!("y"),
            },
        );
        let events = Reducer::reduce(&mut session, Intent::Save);

        assert_eq!(events[0], OverlayEvent::FormSubmitting);
        let value = submitted(&events).expect("submitted");
        assert_eq!(value.key, EditorKey::new("item"));
        let entries: Vec<_> = value
            .value
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        assert_eq!(entries, vec![("a", json!("x")), ("b", json!("y"))]);
        assert_eq!(session.close_reason(), Some(CloseReason::Saved));
    }

    #[test]
    fn sole_candidate_with_fields_skips_straight_to_edit() {
        let config = OverlayConfig {
            items: vec![model("only", "Only", vec![field("a")])],
            ..Default::default()
        };
        let (session, events) = OverlaySession::start(config, None);

        assert!(matches!(session.stage(), Stage::Edit { .. }));
        assert!(!events.contains(&OverlayEvent::EnteredSelect));
        assert!(events.contains(&OverlayEvent::EnteredEdit {
            key: EditorKey::new("only"),
        }));
        assert_eq!(session.title(), "Configure Only");
    }

    #[test]
    fn sole_candidate_without_fields_commits_immediately() {
        let config = OverlayConfig {
            items: vec![model("only", "Only", Vec::new())],
            ..Default::default()
        };
        let (session, events) = OverlaySession::start(config, None);

        assert!(!events.contains(&OverlayEvent::EnteredSelect));
        assert_eq!(
            events,
            vec![
                OverlayEvent::FormSubmitting,
                OverlayEvent::Submitted(StoredValue::new(EditorKey::new("only"), ConfigMap::new())),
            ]
        );
        assert_eq!(session.close_reason(), Some(CloseReason::Saved));
    }

    #[test]
    fn auto_select_disabled_shows_the_sole_candidate() {
        let config = OverlayConfig {
            auto_select: false,
            items: vec![model("only", "Only", vec![field("a")])],
            ..Default::default()
        };
        let (session, events) = OverlaySession::start(config, None);
        assert!(events.contains(&OverlayEvent::EnteredSelect));
        assert!(matches!(session.stage(), Stage::Select));
    }

    #[test]
    fn choosing_a_zero_field_item_saves_without_an_empty_form() {
        let config = OverlayConfig {
            items: vec![
                model("bare", "Bare", Vec::new()),
                model("rich", "Rich", vec![field("a")]),
            ],
            ..Default::default()
        };
        let (mut session, _) = OverlaySession::start(config, None);

        let events = Reducer::reduce(&mut session, Intent::Choose(EditorKey::new("bare")));
        let value = submitted(&events).expect("submitted");
        assert_eq!(value.key, EditorKey::new("bare"));
        assert!(value.value.is_empty());
        assert!(session.is_closed());
    }

    #[test]
    fn edit_values_layer_stored_over_defaults_over_implicit() {
        let mut item = model(
            "item",
            "Item",
            vec![
                field("fromStored"),
                field("fromDefaults"),
                ConfigurationField::new("fromWidget", "From widget", "boolean")
                    .with_config_entry("default", true),
            ],
        );
        item.default_values
            .insert("fromDefaults".to_string(), json!("d"));
        item.default_values
            .insert("fromStored".to_string(), json!("ignored"));

        let config = OverlayConfig {
            items: vec![item],
            ..Default::default()
        };
        let prior = stored("item", &[("fromStored", json!("s")), ("stale", json!("z"))]);
        let (mut session, _) = OverlaySession::start(config, Some(prior));

        let events = Reducer::reduce(&mut session, Intent::Save);
        let value = submitted(&events).expect("submitted");
        let entries: Vec<_> = value
            .value
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        // Stale stored keys are dropped; each field resolves layer by layer.
        assert_eq!(
            entries,
            vec![
                ("fromStored", json!("s")),
                ("fromDefaults", json!("d")),
                ("fromWidget", json!(true)),
            ]
        );
    }

    #[test]
    fn stored_value_for_another_item_kind_is_ignored() {
        let mut item = model("item", "Item", vec![field("a")]);
        item.default_values.insert("a".to_string(), json!("default"));
        let config = OverlayConfig {
            items: vec![item],
            ..Default::default()
        };
        let prior = stored("somebody::else", &[("a", json!("theirs"))]);
        let (mut session, _) = OverlaySession::start(config, Some(prior));

        let events = Reducer::reduce(&mut session, Intent::Save);
        let value = submitted(&events).expect("submitted");
        assert_eq!(value.value.get("a"), Some(&json!("default")));
    }

    #[test]
    fn cancel_at_edit_emits_no_result() {
        let config = OverlayConfig {
            items: vec![model("item", "Item", vec![field("a")])],
            ..Default::default()
        };
        let (mut session, _) = OverlaySession::start(config, None);

        let events = Reducer::reduce(&mut session, Intent::Cancel);
        assert_eq!(events, vec![OverlayEvent::Cancelled]);
        assert_eq!(session.close_reason(), Some(CloseReason::Cancelled));

        // The session is terminal; later intents do nothing.
        assert!(Reducer::reduce(&mut session, Intent::Save).is_empty());
        assert!(Reducer::reduce(&mut session, Intent::Cancel).is_empty());
    }

    #[test]
    fn size_changes_only_when_entering_edit() {
        let config = OverlayConfig {
            overlay_size: OverlaySize::Small,
            items: vec![
                model("item", "Item", vec![field("a")]),
                model("other", "Other", vec![field("b")]),
            ],
            ..Default::default()
        };
        let (mut session, start_events) = OverlaySession::start(config, None);
        assert!(
            !start_events
                .iter()
                .any(|event| matches!(event, OverlayEvent::SizeChanged(_)))
        );
        assert_eq!(session.overlay_size(), None);

        let events = Reducer::reduce(&mut session, Intent::Choose(EditorKey::new("item")));
        assert!(events.contains(&OverlayEvent::SizeChanged(OverlaySize::Small)));
        assert_eq!(session.overlay_size(), Some(OverlaySize::Small));

        // Already in edit: field writes never re-emit a size change.
        let events = Reducer::reduce(
            &mut session,
            Intent::SetField {
                key: "a".to_string(),
                value: json!("x"),
            },
        );
        assert_eq!(
            events,
            vec![OverlayEvent::Dirty {
                key: "a".to_string(),
            }]
        );
    }

    #[test]
    fn set_field_ignores_unknown_keys() {
        let config = OverlayConfig {
            items: vec![model("item", "Item", vec![field("a")])],
            ..Default::default()
        };
        let (mut session, _) = OverlaySession::start(config, None);

        let events = Reducer::reduce(
            &mut session,
            Intent::SetField {
                key: "missing".to_string(),
                value: json!("x"),
            },
        );
        assert!(events.is_empty());
    }

    #[test]
    fn choosing_an_unknown_key_is_ignored() {
        let config = OverlayConfig {
            auto_select: false,
            items: vec![model("item", "Item", vec![field("a")])],
            ..Default::default()
        };
        let (mut session, _) = OverlaySession::start(config, None);

        let events = Reducer::reduce(&mut session, Intent::Choose(EditorKey::new("nope")));
        assert!(events.is_empty());
        assert!(matches!(session.stage(), Stage::Select));
    }

    #[test]
    fn edit_mode_seeds_from_the_prior_stored_value() {
        let editor = model("item", "Item", vec![field("a"), field("b")]);
        let config = OverlayConfig {
            mode: OverlayMode::Edit,
            editor: Some(editor),
            ..Default::default()
        };
        let prior = stored("item", &[("a", json!("kept"))]);
        let (mut session, events) = OverlaySession::start(config, Some(prior));

        assert!(events.contains(&OverlayEvent::EnteredEdit {
            key: EditorKey::new("item"),
        }));

        let events = Reducer::reduce(&mut session, Intent::Save);
        let value = submitted(&events).expect("submitted");
        assert_eq!(value.value.get("a"), Some(&json!("kept")));
        assert_eq!(value.value.get("b"), Some(&json!(null)));
    }

    #[test]
    fn save_while_selecting_does_nothing() {
        let config = OverlayConfig {
            auto_select: false,
            items: vec![model("item", "Item", vec![field("a")])],
            ..Default::default()
        };
        let (mut session, _) = OverlaySession::start(config, None);

        assert!(Reducer::reduce(&mut session, Intent::Save).is_empty());
        assert!(matches!(session.stage(), Stage::Select));
    }
}
