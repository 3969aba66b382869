//! `unavailable` members: one error per diagnosed reference and one
//! "marked unavailable here" note per error.

use fence_diagnostic::Severity;
use fence_ir::{AttrKind, DeclContext};
use pretty_assertions::assert_eq;

use crate::harness::{assert_notes_follow_errors, Harness};

const ALL: [bool; 5] = [true; 5];

#[test]
fn test_same_file() {
    let mut h = Harness::new(AttrKind::Unavailable);
    let defs = h.defs;
    let in_type = h.reference_members(defs, DeclContext::Type(h.foo));
    let ext = h.extend_foo(defs);
    let in_extension = h.reference_members(defs, ext);
    let top_level = h.reference_members(defs, DeclContext::TopLevel);

    let mut fixture = h.finish();
    fixture.expect_uses(in_type, [true, true, false, false, false]);
    fixture.expect_uses(in_extension, [true, true, false, false, false]);
    fixture.expect_uses(top_level, [true, true, true, false, false]);
    fixture.expect_notes([3, 3, 1, 0, 0]);

    let output = fixture.check();
    fixture.assert_note_tallies(&output, [3, 3, 1, 0, 0]);
    assert_eq!(output.error_count, 7);
    assert_eq!(output.note_count, 7);
}

#[test]
fn test_different_file_same_module() {
    let mut h = Harness::new(AttrKind::Unavailable);
    let other = h.add_file(h.app, "multi.fence");
    let top_level = h.reference_members(other, DeclContext::TopLevel);
    let ext = h.extend_foo(other);
    let in_extension = h.reference_members(other, ext);

    let mut fixture = h.finish();
    // An extension in another file gets no private access.
    fixture.expect_uses(top_level, [true, true, true, true, false]);
    fixture.expect_uses(in_extension, [true, true, true, true, false]);
    fixture.expect_notes([2, 2, 2, 2, 0]);

    let output = fixture.check();
    fixture.assert_note_tallies(&output, [2, 2, 2, 2, 0]);
}

#[test]
fn test_different_module() {
    let mut h = Harness::new(AttrKind::Unavailable);
    let client = h.add_module("Client");
    let file = h.add_file(client, "client.fence");
    let ext = h.extend_foo(file);
    let in_extension = h.reference_members(file, ext);
    let top_level = h.reference_members(file, DeclContext::TopLevel);

    let mut fixture = h.finish();
    fixture.expect_uses(in_extension, ALL);
    fixture.expect_uses(top_level, ALL);
    fixture.expect_notes([2; 5]);

    let output = fixture.check();
    fixture.assert_note_tallies(&output, [2; 5]);
}

#[test]
fn test_tally_counts_only_this_compilation() {
    // Same declarations as `test_same_file`, referenced only from inside
    // `struct Foo`: the tallies drop to match.
    let mut h = Harness::new(AttrKind::Unavailable);
    let defs = h.defs;
    let in_type = h.reference_members(defs, DeclContext::Type(h.foo));

    let mut fixture = h.finish();
    fixture.expect_uses(in_type, [true, true, false, false, false]);
    fixture.expect_notes([1, 1, 0, 0, 0]);

    let output = fixture.check();
    fixture.assert_note_tallies(&output, [1, 1, 0, 0, 0]);
}

#[test]
fn test_unreferenced_members_are_silent() {
    let mut h = Harness::new(AttrKind::Unavailable);
    let client = h.add_module("Client");
    h.add_file(client, "client.fence");

    let fixture = h.finish();
    let output = fixture.check();
    fixture.assert_note_tallies(&output, [0; 5]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_mixed_positions_in_one_program() {
    let mut h = Harness::new(AttrKind::Unavailable);
    let defs = h.defs;
    let other = h.add_file(h.app, "other.fence");
    let client = h.add_module("Client");
    let client_file = h.add_file(client, "client.fence");

    let same_file = h.reference_members(defs, DeclContext::TopLevel);
    let other_file = h.reference_members(other, DeclContext::TopLevel);
    let other_module = h.reference_members(client_file, DeclContext::TopLevel);
    let ext = h.extend_foo(defs);
    let spared = h.reference_members(defs, ext);

    let mut fixture = h.finish();
    fixture.expect_uses(same_file, [true, true, true, false, false]);
    fixture.expect_uses(other_file, [true, true, true, true, false]);
    fixture.expect_uses(other_module, ALL);
    fixture.expect_uses(spared, [true, true, false, false, false]);
    fixture.expect_notes([4, 4, 3, 2, 1]);

    let output = fixture.check();
    fixture.assert_note_tallies(&output, [4, 4, 3, 2, 1]);
}

#[test]
fn test_notes_stay_with_errors_from_later_files() {
    // The declarations sit in defs.fence, ahead of every use, yet each
    // note is printed right after the error that produced it.
    let mut h = Harness::new(AttrKind::Unavailable);
    let other = h.add_file(h.app, "other.fence");
    let top_level = h.reference_members(other, DeclContext::TopLevel);

    let mut fixture = h.finish();
    fixture.expect_uses(top_level, [true, true, true, true, false]);
    fixture.expect_notes([1, 1, 1, 1, 0]);

    let output = fixture.check();
    let severities: Vec<_> = output.diagnostics.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        [Severity::Error, Severity::Note].repeat(4),
        "diagnostics out of order"
    );
    assert_notes_follow_errors(&output.diagnostics);
}
