//! `deprecated` members: one warning per diagnosed reference, no notes.

use fence_ir::{AttrKind, DeclContext};

use crate::harness::Harness;

#[test]
fn test_same_and_different_file() {
    let mut h = Harness::new(AttrKind::Deprecated);
    let defs = h.defs;
    let other = h.add_file(h.app, "other.fence");

    let in_type = h.reference_members(defs, DeclContext::Type(h.foo));
    let same_ext = h.extend_foo(defs);
    let in_same_file_extension = h.reference_members(defs, same_ext);
    let same_file = h.reference_members(defs, DeclContext::TopLevel);
    let other_file = h.reference_members(other, DeclContext::TopLevel);
    let other_ext = h.extend_foo(other);
    let in_other_file_extension = h.reference_members(other, other_ext);

    let mut fixture = h.finish();
    fixture.expect_uses(in_type, [true, true, false, false, false]);
    fixture.expect_uses(in_same_file_extension, [true, true, false, false, false]);
    fixture.expect_uses(same_file, [true, true, true, false, false]);
    fixture.expect_uses(other_file, [true, true, true, true, false]);
    fixture.expect_uses(in_other_file_extension, [true, true, true, true, false]);

    let output = fixture.check();
    assert_eq!(output.warning_count, 15);
    assert_eq!(output.error_count, 0);
    assert!(!output.has_errors());
    fixture.assert_note_tallies(&output, [0; 5]);

    let firings = fixture.members.map(|decl| output.counts_for(decl).firings);
    assert_eq!(firings, [5, 5, 3, 2, 0]);
}

#[test]
fn test_different_module() {
    let mut h = Harness::new(AttrKind::Deprecated);
    let client = h.add_module("Client");
    let file = h.add_file(client, "client.fence");
    let ext = h.extend_foo(file);
    let in_extension = h.reference_members(file, ext);
    let top_level = h.reference_members(file, DeclContext::TopLevel);

    let mut fixture = h.finish();
    fixture.expect_uses(in_extension, [true; 5]);
    fixture.expect_uses(top_level, [true; 5]);

    let output = fixture.check();
    assert_eq!(output.warning_count, 10);
    assert_eq!(output.note_count, 0);
}
