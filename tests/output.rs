use agenda::output::{format_human, HumanOutput};

#[test]
fn format_human_includes_sections() {
    let mut human = HumanOutput::new("agenda list: work (1 contacts)");
    human.push_summary("path", "/tmp/work.txt");
    human.push_detail("#1 Ana Lopez | 12345678 | ana@mail.com");
    human.push_warning("no meetings scheduled");
    human.push_next_step("agenda meet ana --date 01/01/25");

    let rendered = format_human(&human);
    assert!(rendered.contains("agenda list: work (1 contacts)"));
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("- path: /tmp/work.txt"));
    assert!(rendered.contains("Details:"));
    assert!(rendered.contains("- #1 Ana Lopez | 12345678 | ana@mail.com"));
    assert!(rendered.contains("Warnings:"));
    assert!(rendered.contains("Next steps:"));
    assert!(rendered.contains("- agenda meet ana --date 01/01/25"));
}

#[test]
fn format_human_omits_empty_sections() {
    let human = HumanOutput::new("agenda agendas: 0 found");
    let rendered = format_human(&human);
    assert_eq!(rendered, "agenda agendas: 0 found");
}
