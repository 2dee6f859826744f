//! Integration tests for the mailnav crate
//!
//! These tests drive the resolver through the public API the way a mail view
//! does: a snapshot of settings, labels, open element and cache, then one
//! action at a time.

use std::cell::Cell;

use mailnav::{
    BackDecision, CacheMissPolicy, Conversation, Element, ElementId, Expectation,
    InMemoryConversationCache, LabelCatalog, LabelChanges, LabelId, MailAction, MailSettings,
    MailboxLocation, MarkAsStatus, Message, MoveBackResolver, NavigateReason, OpenElement,
    ReadFilter, Scenario, StayReason, remains_visible,
};
use tempfile::TempDir;

/// Helper to create a message filed under the given labels
fn make_message(id: &str, conversation_id: &str, labels: &[&str]) -> Message {
    Message::builder(id, conversation_id)
        .label_ids(labels.iter().map(|l| LabelId::from(*l)).collect())
        .build()
}

/// Helper to create one action of every kind on the given elements
fn every_action(elements: Vec<Element>) -> Vec<MailAction> {
    vec![
        MailAction::move_to(elements.clone(), LabelId::TRASH),
        MailAction::move_to(elements.clone(), LabelId::INBOX),
        MailAction::apply_labels(elements.clone(), LabelChanges::new().remove(LabelId::INBOX)),
        MailAction::star(elements.clone()),
        MailAction::unstar(elements.clone()),
        MailAction::permanent_delete(elements.clone()),
        MailAction::mark_as(elements.clone(), MarkAsStatus::Read),
        MailAction::mark_as(elements, MarkAsStatus::Unread),
    ]
}

/// Run `action` and count navigate-back calls
fn count_navigations(resolver: &MoveBackResolver<'_>, action: &MailAction) -> (BackDecision, usize) {
    let calls = Cell::new(0);
    let decision = resolver.handle(action, || calls.set(calls.get() + 1));
    (decision, calls.get())
}

#[test]
fn test_move_predicate_depends_only_on_destination() {
    let labels = [LabelId::INBOX, LabelId::ARCHIVE, LabelId::TRASH, LabelId::SPAM, "Folder_9"];
    for source in labels {
        for dest in labels {
            let action = MailAction::move_to(vec![make_message("m1", "c1", &[source]).into()], dest);
            let location = MailboxLocation::new(source);
            assert_eq!(remains_visible(&action, &location), source == dest, "{source} -> {dest}");
        }
    }
}

#[test]
fn test_permanent_delete_is_never_visible() {
    let elements: Vec<Element> = vec![
        make_message("m1", "c1", &[LabelId::INBOX, LabelId::STARRED]).into(),
        Conversation::new("c2").with_label(LabelId::TRASH, 1, 1).into(),
    ];
    for label in [LabelId::INBOX, LabelId::STARRED, LabelId::TRASH, LabelId::ALL_MAIL] {
        for filter in [None, Some(ReadFilter::Unread), Some(ReadFilter::Read)] {
            let location = MailboxLocation {
                label_id: LabelId::from(label),
                filter,
            };
            let action = MailAction::permanent_delete(elements.clone());
            assert!(!remains_visible(&action, &location));
        }
    }
}

#[test]
fn test_mark_read_never_navigates_in_message_mode() {
    let settings = MailSettings::message_mode();
    let labels = LabelCatalog::with_system_labels();
    let cache = InMemoryConversationCache::new();

    for filter in [None, Some(ReadFilter::Unread), Some(ReadFilter::Read)] {
        let open = OpenElement::new(
            ElementId::message("m1"),
            MailboxLocation {
                label_id: LabelId::from(LabelId::INBOX),
                filter,
            },
        );
        let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);
        let action = MailAction::mark_as(
            vec![make_message("m1", "c1", &[LabelId::INBOX]).into()],
            MarkAsStatus::Read,
        );

        let (_, calls) = count_navigations(&resolver, &action);
        assert_eq!(calls, 0);
    }
}

#[test]
fn test_conversation_sibling_keeps_open_conversation() {
    let settings = MailSettings::conversation_mode();
    let labels = LabelCatalog::with_system_labels();
    let m1 = make_message("m1", "c1", &[LabelId::INBOX]);
    let m2 = make_message("m2", "c1", &[LabelId::INBOX]);
    let cache: InMemoryConversationCache = [m1.clone(), m2.clone()].into_iter().collect();
    let open = OpenElement::new(ElementId::conversation("c1"), MailboxLocation::new(LabelId::INBOX));
    let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);

    let only_open = MailAction::move_to(vec![m1.clone().into()], LabelId::ARCHIVE);
    let (decision, calls) = count_navigations(&resolver, &only_open);
    assert_eq!(decision, BackDecision::Stay(StayReason::ConversationStillPresent));
    assert_eq!(calls, 0);

    let both = MailAction::move_to(vec![m1.into(), m2.into()], LabelId::ARCHIVE);
    let (decision, calls) = count_navigations(&resolver, &both);
    assert_eq!(decision, BackDecision::NavigateBack(NavigateReason::ConversationEmptied));
    assert_eq!(calls, 1);
}

#[test]
fn test_conversation_sibling_keeps_open_message() {
    let settings = MailSettings::conversation_mode();
    let labels = LabelCatalog::with_system_labels();
    let m1 = make_message("m1", "c1", &[LabelId::INBOX]);
    let m2 = make_message("m2", "c1", &[LabelId::INBOX]);
    let cache: InMemoryConversationCache = [m1.clone(), m2.clone()].into_iter().collect();
    let open = OpenElement::new(ElementId::message("m1"), MailboxLocation::new(LabelId::INBOX));
    let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);

    let only_open = MailAction::move_to(vec![m1.clone().into()], LabelId::TRASH);
    let (decision, calls) = count_navigations(&resolver, &only_open);
    assert_eq!(decision, BackDecision::Stay(StayReason::ConversationStillPresent));
    assert_eq!(calls, 0);

    let both = MailAction::move_to(vec![m1.into(), m2.into()], LabelId::TRASH);
    let (_, calls) = count_navigations(&resolver, &both);
    assert_eq!(calls, 1);
}

#[test]
fn test_label_counts_decide_when_messages_are_not_loaded() {
    let settings = MailSettings::conversation_mode();
    let labels = LabelCatalog::with_system_labels();
    let cache = InMemoryConversationCache::new();
    let open = OpenElement::new(ElementId::conversation("c1"), MailboxLocation::new(LabelId::INBOX));
    let action = MailAction::move_to(vec![make_message("m1", "c1", &[LabelId::INBOX]).into()], LabelId::ARCHIVE);

    cache.upsert_conversation(Conversation::new("c1").with_label(LabelId::INBOX, 2, 0));
    let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);
    assert_eq!(resolver.resolve(&action), BackDecision::Stay(StayReason::ConversationStillPresent));

    cache.upsert_conversation(Conversation::new("c1").with_label(LabelId::INBOX, 1, 0));
    assert_eq!(
        resolver.resolve(&action),
        BackDecision::NavigateBack(NavigateReason::ConversationEmptied)
    );
}

#[test]
fn test_no_open_element_never_navigates() {
    let labels = LabelCatalog::with_system_labels();
    let cache = InMemoryConversationCache::new();
    let elements: Vec<Element> = vec![
        make_message("m1", "c1", &[LabelId::INBOX]).into(),
        Conversation::new("c1").into(),
    ];

    for settings in [MailSettings::conversation_mode(), MailSettings::message_mode()] {
        let resolver = MoveBackResolver::new(&settings, &labels, None, &cache);
        for action in every_action(elements.clone()) {
            let (decision, calls) = count_navigations(&resolver, &action);
            assert_eq!(decision, BackDecision::Stay(StayReason::NoOpenElement));
            assert_eq!(calls, 0);
        }
    }
}

#[test]
fn test_cache_miss_navigates_back() {
    let settings = MailSettings::conversation_mode();
    let labels = LabelCatalog::with_system_labels();
    let cache = InMemoryConversationCache::new();
    let open = OpenElement::new(ElementId::conversation("c1"), MailboxLocation::new(LabelId::INBOX));
    let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);

    let action = MailAction::move_to(vec![make_message("m1", "c1", &[LabelId::INBOX]).into()], LabelId::TRASH);
    let (decision, calls) = count_navigations(&resolver, &action);
    assert_eq!(decision, BackDecision::NavigateBack(NavigateReason::ConversationCacheMiss));
    assert_eq!(calls, 1);

    let lenient = settings.clone().with_cache_miss(CacheMissPolicy::Stay);
    let resolver = MoveBackResolver::new(&lenient, &labels, Some(&open), &cache);
    let (_, calls) = count_navigations(&resolver, &action);
    assert_eq!(calls, 0);
}

#[test]
fn test_resolving_twice_gives_same_decision() {
    let labels = LabelCatalog::with_system_labels();
    let cache: InMemoryConversationCache = [
        make_message("m1", "c1", &[LabelId::INBOX, LabelId::STARRED]),
        make_message("m2", "c1", &[LabelId::STARRED]),
    ]
    .into_iter()
    .collect();
    let open = OpenElement::new(ElementId::conversation("c1"), MailboxLocation::new(LabelId::STARRED));
    let elements: Vec<Element> = vec![make_message("m1", "c1", &[LabelId::INBOX, LabelId::STARRED]).into()];

    for settings in [MailSettings::conversation_mode(), MailSettings::message_mode()] {
        let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);
        for action in every_action(elements.clone()) {
            assert_eq!(resolver.resolve(&action), resolver.resolve(&action));
            assert_eq!(count_navigations(&resolver, &action), count_navigations(&resolver, &action));
        }
    }
}

#[test]
fn test_cache_updates_change_later_decisions() {
    let settings = MailSettings::conversation_mode();
    let labels = LabelCatalog::with_system_labels();
    let cache = InMemoryConversationCache::new();
    let open = OpenElement::new(ElementId::conversation("c1"), MailboxLocation::new(LabelId::INBOX));
    let action = MailAction::move_to(vec![make_message("m1", "c1", &[LabelId::INBOX]).into()], LabelId::TRASH);

    let before = MoveBackResolver::new(&settings, &labels, Some(&open), &cache).resolve(&action);
    assert_eq!(before, BackDecision::NavigateBack(NavigateReason::ConversationCacheMiss));

    cache.upsert_message(make_message("m1", "c1", &[LabelId::INBOX]));
    cache.upsert_message(make_message("m2", "c1", &[LabelId::INBOX]));

    let after = MoveBackResolver::new(&settings, &labels, Some(&open), &cache).resolve(&action);
    assert_eq!(after, BackDecision::Stay(StayReason::ConversationStillPresent));
}

#[test]
fn test_scenario_file_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("unstar.json");
    std::fs::write(
        &path,
        r#"{
            "name": "unstar last starred message",
            "settings": {"view_mode": "conversation"},
            "open": {"id": {"conversation": "c1"}, "location": {"label_id": "STARRED"}},
            "conversations": [{
                "id": "c1",
                "messages": [
                    {"id": "m1", "conversation_id": "c1", "label_ids": ["INBOX", "STARRED"]},
                    {"id": "m2", "conversation_id": "c1", "label_ids": ["INBOX"]}
                ]
            }],
            "action": {
                "type": "star",
                "unstar": true,
                "elements": [{"kind": "message", "id": "m1", "conversation_id": "c1", "label_ids": ["INBOX", "STARRED"]}]
            },
            "expect": "navigate_back"
        }"#,
    )
    .unwrap();

    let scenario = Scenario::from_file(&path).unwrap();
    let decision = scenario.resolve();

    assert_eq!(decision, BackDecision::NavigateBack(NavigateReason::ConversationEmptied));
    assert_eq!(scenario.expect, Some(Expectation::NavigateBack));
    assert!(Expectation::NavigateBack.is_met_by(&decision));
}

#[test]
fn test_settings_file_drives_view_mode() {
    let tmp = TempDir::new().unwrap();
    let path = config::save_json_in(tmp.path(), "mail-settings.json", &MailSettings::message_mode()).unwrap();
    let settings = MailSettings::from_file(&path).unwrap();

    let labels = LabelCatalog::with_system_labels();
    let cache = InMemoryConversationCache::new();
    let open = OpenElement::new(ElementId::conversation("c1"), MailboxLocation::new(LabelId::INBOX));
    let resolver = MoveBackResolver::new(&settings, &labels, Some(&open), &cache);

    // Conversation membership only counts in conversation mode
    let action = MailAction::move_to(vec![make_message("m1", "c1", &[LabelId::INBOX]).into()], LabelId::TRASH);
    assert_eq!(resolver.resolve(&action), BackDecision::Stay(StayReason::NotAffected));
}
