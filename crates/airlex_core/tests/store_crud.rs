use airlex_core::store::views;
use airlex_core::{
    LinkPatch, MemoryBackend, NewLink, NewNote, NewRegulation, NotePatch, RegulationPatch,
    StoreError, UserStore,
};

fn open_memory_store() -> UserStore {
    UserStore::open(Box::new(MemoryBackend::new())).unwrap()
}

#[test]
fn add_regulation_assigns_id_and_timestamps() {
    let mut store = open_memory_store();

    let id = store.add_regulation(NewRegulation {
        category: "OM Vol.1".to_string(),
        reference_number: "5.7.10".to_string(),
        title: "携帯品".to_string(),
        description: String::new(),
    });

    let regulation = store.document().regulations.get(&id).unwrap();
    assert!(id.starts_with("reg_"));
    assert_eq!(regulation.id, id);
    assert_eq!(regulation.created_at, regulation.updated_at);
}

#[test]
fn update_regulation_merges_partial_fields() {
    let mut store = open_memory_store();
    let id = store.add_regulation(NewRegulation {
        category: "OM Vol.1".to_string(),
        reference_number: "5.7.10".to_string(),
        title: "draft".to_string(),
        description: "old".to_string(),
    });

    store
        .update_regulation(
            &id,
            RegulationPatch {
                title: Some("携帯品".to_string()),
                ..RegulationPatch::default()
            },
        )
        .unwrap();

    let regulation = store.document().regulations.get(&id).unwrap();
    assert_eq!(regulation.title, "携帯品");
    assert_eq!(regulation.description, "old");
    assert_eq!(regulation.reference_number, "5.7.10");
    assert!(regulation.updated_at >= regulation.created_at);
}

#[test]
fn update_missing_regulation_returns_not_found() {
    let mut store = open_memory_store();
    let err = store
        .update_regulation("reg_missing", RegulationPatch::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "regulation", .. }));
}

#[test]
fn delete_regulation_cascades_to_its_links_only() {
    let mut store = open_memory_store();
    let keep_reg = store.add_regulation(NewRegulation {
        category: "OM Vol.2".to_string(),
        reference_number: "1.1".to_string(),
        title: "keep".to_string(),
        description: String::new(),
    });
    let doomed_reg = store.add_regulation(NewRegulation {
        category: "OM Vol.1".to_string(),
        reference_number: "9.9".to_string(),
        title: "doomed".to_string(),
        description: String::new(),
    });

    let keep_link = store.add_link(NewLink {
        source_article_id: "law73".to_string(),
        target_regulation_id: keep_reg.clone(),
        ..NewLink::default()
    });
    store.add_link(NewLink {
        source_article_id: "law73".to_string(),
        target_regulation_id: doomed_reg.clone(),
        ..NewLink::default()
    });
    store.add_link(NewLink {
        source_article_id: "law74".to_string(),
        target_regulation_id: doomed_reg.clone(),
        ..NewLink::default()
    });

    store.delete_regulation(&doomed_reg).unwrap();

    let document = store.document();
    assert!(!document.regulations.contains_key(&doomed_reg));
    assert!(document.regulations.contains_key(&keep_reg));
    assert_eq!(document.links.len(), 1);
    assert!(document.links.contains_key(&keep_link));
}

#[test]
fn update_link_can_set_and_clear_optional_fields() {
    let mut store = open_memory_store();
    let id = store.add_link(NewLink {
        source_article_id: "law67".to_string(),
        highlighted_text: Some("技能証明書".to_string()),
        target_regulation_id: "reg_1".to_string(),
        note: None,
    });

    store
        .update_link(
            &id,
            LinkPatch {
                highlighted_text: Some(None),
                note: Some(Some("携帯品と対応".to_string())),
            },
        )
        .unwrap();

    let link = store.document().links.get(&id).unwrap();
    assert_eq!(link.highlighted_text, None);
    assert_eq!(link.note.as_deref(), Some("携帯品と対応"));
}

#[test]
fn delete_missing_link_returns_not_found() {
    let mut store = open_memory_store();
    let err = store.delete_link("link_missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "link", .. }));
}

#[test]
fn note_crud_roundtrip() {
    let mut store = open_memory_store();
    let id = store.add_note(NewNote {
        article_id: "law73_2".to_string(),
        content: "出発前確認の根拠".to_string(),
    });

    store
        .update_note(
            &id,
            NotePatch {
                content: Some("出発前確認の法的根拠まとめ".to_string()),
            },
        )
        .unwrap();
    assert_eq!(
        store.document().notes.get(&id).unwrap().content,
        "出発前確認の法的根拠まとめ"
    );

    store.delete_note(&id).unwrap();
    assert!(store.document().notes.is_empty());
}

#[test]
fn link_scenario_for_article_law67() {
    let mut store = open_memory_store();

    let reg_id = store.add_regulation(NewRegulation {
        category: "OM Vol.1".to_string(),
        reference_number: "5.7.10".to_string(),
        title: "携帯品".to_string(),
        description: String::new(),
    });
    store.add_link(NewLink {
        source_article_id: "law67".to_string(),
        highlighted_text: Some("技能証明書".to_string()),
        target_regulation_id: reg_id.clone(),
        note: None,
    });

    let document = store.document();
    let counts = views::link_count_by_article(document);
    assert_eq!(counts.get("law67"), Some(&1));

    let linked = views::linked_regulations_by_article(document);
    let regs = linked.get("law67").unwrap();
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].id, reg_id);
    assert_eq!(regs[0].reference_number, "5.7.10");
}

#[test]
fn linked_regulations_deduplicate_by_regulation() {
    let mut store = open_memory_store();
    let reg_id = store.add_regulation(NewRegulation {
        category: "OM".to_string(),
        reference_number: "5.7.10".to_string(),
        title: "携帯品".to_string(),
        description: String::new(),
    });
    // Two links from the same article to the same regulation.
    for excerpt in ["技能証明書", "航空身体検査証明書"] {
        store.add_link(NewLink {
            source_article_id: "law67".to_string(),
            highlighted_text: Some(excerpt.to_string()),
            target_regulation_id: reg_id.clone(),
            note: None,
        });
    }

    let document = store.document();
    assert_eq!(views::link_count_by_article(document).get("law67"), Some(&2));
    assert_eq!(
        views::linked_regulations_by_article(document)
            .get("law67")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn dangling_link_targets_are_skipped_in_resolved_views() {
    let mut store = open_memory_store();
    store.add_link(NewLink {
        source_article_id: "law67".to_string(),
        target_regulation_id: "reg_gone".to_string(),
        ..NewLink::default()
    });
    store.add_link(NewLink {
        source_article_id: "not_an_article".to_string(),
        target_regulation_id: "reg_gone".to_string(),
        ..NewLink::default()
    });

    let document = store.document();
    // Deduplicated regulation view drops the dangling target entirely.
    assert!(views::linked_regulations_by_article(document)
        .get("law67")
        .is_none());

    // Resolved links keep the record and surface the misses as None.
    let resolved = views::resolved_links(document);
    assert_eq!(resolved.len(), 2);
    assert!(resolved.iter().all(|link| link.regulation.is_none()));
    assert!(resolved
        .iter()
        .any(|link| link.article.is_none() && link.link.source_article_id == "not_an_article"));
}

#[test]
fn per_article_and_per_regulation_getters() {
    let mut store = open_memory_store();
    let reg_id = store.add_regulation(NewRegulation {
        category: "OM".to_string(),
        reference_number: "2.1.3.10".to_string(),
        title: "整備状況の確認".to_string(),
        description: String::new(),
    });
    store.add_link(NewLink {
        source_article_id: "law73_2".to_string(),
        target_regulation_id: reg_id.clone(),
        ..NewLink::default()
    });
    store.add_link(NewLink {
        source_article_id: "law99".to_string(),
        target_regulation_id: reg_id.clone(),
        ..NewLink::default()
    });
    store.add_note(NewNote {
        article_id: "law73_2".to_string(),
        content: "確認事項メモ".to_string(),
    });

    let document = store.document();
    assert_eq!(views::links_for_article(document, "law73_2").len(), 1);
    assert_eq!(views::links_for_regulation(document, &reg_id).len(), 2);
    assert_eq!(views::notes_for_article(document, "law73_2").len(), 1);
    assert_eq!(views::note_count_by_article(document).get("law73_2"), Some(&1));

    let grouped = views::links_by_regulation(document);
    assert_eq!(grouped.get(reg_id.as_str()).unwrap().len(), 2);
}

#[test]
fn regulation_filter_and_labels() {
    let mut store = open_memory_store();
    for (category, reference_number, title) in [
        ("OM Vol.1", "5.7.10", "携帯品"),
        ("OM Vol.1", "2.1.3", "整備確認"),
        ("Company Order", "31", "服務規程"),
    ] {
        store.add_regulation(NewRegulation {
            category: category.to_string(),
            reference_number: reference_number.to_string(),
            title: title.to_string(),
            description: String::new(),
        });
    }

    let document = store.document();
    assert_eq!(
        views::regulation_category_labels(document),
        vec!["Company Order", "OM Vol.1"]
    );

    let om_only = views::filter_regulations(document, Some("OM Vol.1"), "");
    assert_eq!(om_only.len(), 2);
    // Sorted by category label, then reference number.
    assert_eq!(om_only[0].reference_number, "2.1.3");
    assert_eq!(om_only[1].reference_number, "5.7.10");

    let queried = views::filter_regulations(document, None, "服務");
    assert_eq!(queried.len(), 1);
    assert_eq!(queried[0].category, "Company Order");
}
