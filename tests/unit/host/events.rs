use super::*;

#[test]
fn script_ids_translate_to_named_events() {
    assert_eq!(
        ScriptEvent::from_script_id(901),
        Some(ScriptEvent::LayoutModeChanged)
    );
    assert_eq!(
        ScriptEvent::from_script_id(3305),
        ScriptEvent::from_script_id(1699)
    );
    for id in [175, 178, 299, 677] {
        assert_eq!(
            ScriptEvent::from_script_id(id),
            Some(ScriptEvent::ChatboxToggled)
        );
    }
    assert_eq!(ScriptEvent::from_script_id(113), None);
}

#[test]
fn varbits_translate_values() {
    assert_eq!(
        VarbitEvent::from_varbit(542, 1),
        Some(VarbitEvent::Cutscene(true))
    );
    assert_eq!(
        VarbitEvent::from_varbit(542, 0),
        Some(VarbitEvent::Cutscene(false))
    );
    assert_eq!(VarbitEvent::from_varbit(4608, 2), None);
    assert_eq!(VarbitEvent::from_varbit(1, 1), None);
}

#[test]
fn config_changes_are_filtered_by_group_and_key() {
    assert_eq!(
        ConfigChange::classify(CONFIG_GROUP, "aspectRatioResize"),
        Some(ConfigChange::Own(ConfigKey::AspectRatioResize))
    );
    assert_eq!(
        ConfigChange::classify(CONFIG_GROUP, "backgroundColor"),
        Some(ConfigChange::Own(ConfigKey::Other))
    );
    assert_eq!(
        ConfigChange::classify("runelite", "interfacestylesplugin"),
        Some(ConfigChange::Restyle)
    );
    assert_eq!(ConfigChange::classify("runelite", "gameSize"), None);
    assert_eq!(ConfigChange::classify("xpdrop", "anything"), None);
}

#[test]
fn modal_background_groups() {
    assert!(has_modal_background(398));
    assert!(!has_modal_background(214));
}
