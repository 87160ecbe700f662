//! Tests for whole-document export

use chrono::NaiveDate;
use trello2md::Trello2mdError;
use trello2md::core::models::ExportOptions;
use trello2md::core::services::{ExportRequest, export_boards};

use crate::common::{FakeTrello, board, capture, card, check_item, checklist, list};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

fn request(board_ids: &[&str], options: ExportOptions) -> ExportRequest {
    ExportRequest {
        board_ids: board_ids.iter().map(ToString::to_string).collect(),
        list_filter: "Done".to_string(),
        options,
    }
}

/// Board B1 with a Done list holding the "Fix bug" card
fn fix_bug_board() -> FakeTrello {
    let mut fix = card("card1", "Fix bug", "2024-01-05T10:00:00Z");
    fix.desc = "Fixed it".to_string();

    let mut api = FakeTrello::new()
        .with_board(board("b1", "B1"), vec![list("todo", "To Do"), list("done", "Done")])
        .with_cards("done", vec![fix]);
    api.checklists.insert(
        "card1".to_string(),
        vec![checklist(
            "QA",
            vec![check_item("Test", "complete"), check_item("Deploy", "incomplete")],
        )],
    );
    api
}

#[test]
fn full_card_export() {
    let api = fix_bug_board();

    let (result, out) = capture(|out| {
        export_boards(&api, out, &request(&["b1"], ExportOptions::all()), today())
    });
    result.unwrap();

    let expected = "## 2024-02-01\n\
                    ### B1\n\
                    #### **2024-01-05** [Fix bug](https://trello.com/c/card1)\n\
                    ##### - **[]**\n\
                    Fixed it\n\
                    \n\
                    QA\n\
                    - [x] Test\n\
                    - [ ] Deploy\n\
                    \n";
    assert_eq!(out, expected);
}

#[test]
fn all_toggles_off_renders_titles_only() {
    let api = fix_bug_board();

    let (result, out) = capture(|out| {
        export_boards(&api, out, &request(&["b1"], ExportOptions::default()), today())
    });
    result.unwrap();

    assert_eq!(
        out,
        "## 2024-02-01\n### B1\n#### **2024-01-05** [Fix bug](https://trello.com/c/card1)\n"
    );
    assert!(!api.called("members"));
    assert!(!api.called("checklists"));
}

#[test]
fn boards_are_exported_in_request_order() {
    let api = FakeTrello::new()
        .with_board(board("b1", "First"), vec![list("l1", "Done")])
        .with_board(board("b2", "Second"), vec![list("l2", "Done")])
        .with_cards(
            "l1",
            vec![
                card("late", "Late", "2024-01-09T00:00:00Z"),
                card("early", "Early", "2024-01-01T00:00:00Z"),
            ],
        )
        .with_cards("l2", vec![card("only", "Only", "2024-01-03T00:00:00Z")]);

    let (result, out) = capture(|out| {
        export_boards(&api, out, &request(&["b2", "b1"], ExportOptions::default()), today())
    });
    result.unwrap();

    let headings: Vec<&str> = out.lines().collect();
    assert_eq!(
        headings,
        [
            "## 2024-02-01",
            "### Second",
            "#### **2024-01-03** [Only](https://trello.com/c/only)",
            "### First",
            "#### **2024-01-01** [Early](https://trello.com/c/early)",
            "#### **2024-01-09** [Late](https://trello.com/c/late)",
        ]
    );
}

#[test]
fn missing_list_aborts_with_partial_output() {
    let api = fix_bug_board().with_board(board("b2", "B2"), vec![list("x", "Archive")]);

    let (result, out) = capture(|out| {
        export_boards(&api, out, &request(&["b1", "b2"], ExportOptions::default()), today())
    });

    assert!(matches!(result, Err(Trello2mdError::NoMatchingList { ref board, .. }) if board == "B2"));
    assert!(out.contains("### B1"));
    assert!(!out.contains("### B2"));
}

#[test]
fn unknown_board_aborts() {
    let api = fix_bug_board();

    let (result, out) = capture(|out| {
        export_boards(&api, out, &request(&["nope"], ExportOptions::default()), today())
    });

    assert!(matches!(result, Err(Trello2mdError::NotFound { .. })));
    assert_eq!(out, "## 2024-02-01\n");
}

#[test]
fn bad_card_timestamp_aborts_before_any_card_is_written() {
    let api = FakeTrello::new()
        .with_board(board("b1", "B1"), vec![list("l1", "Done")])
        .with_cards(
            "l1",
            vec![
                card("ok", "Ok", "2024-01-01T00:00:00Z"),
                card("bad", "Bad", "2024-01-01"),
            ],
        );

    let (result, out) = capture(|out| {
        export_boards(&api, out, &request(&["b1"], ExportOptions::default()), today())
    });

    assert!(matches!(result, Err(Trello2mdError::TimestampParse { .. })));
    assert_eq!(out, "## 2024-02-01\n### B1\n");
}
