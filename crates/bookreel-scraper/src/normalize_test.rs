use super::*;

// -----------------------------------------------------------------------
// clean_title
// -----------------------------------------------------------------------

#[test]
fn clean_title_strips_buy_suffix() {
    assert_eq!(clean_title("Тень и свет — купить книгу"), "Тень и свет");
    assert_eq!(clean_title("Тень и свет – Читать онлайн"), "Тень и свет");
    assert_eq!(clean_title("Тень и свет - скачать бесплатно"), "Тень и свет");
}

#[test]
fn clean_title_strips_book_word_suffix() {
    assert_eq!(
        clean_title("Тень и свет - книга Ивана Петрова"),
        "Тень и свет"
    );
}

#[test]
fn clean_title_strips_pipe_suffix() {
    assert_eq!(clean_title("Тень и свет | Ridero"), "Тень и свет");
    assert_eq!(clean_title("Тень и свет|Ridero|Магазин"), "Тень и свет");
}

#[test]
fn clean_title_strips_both_suffix_kinds() {
    assert_eq!(
        clean_title("  Тень и свет — купить книгу | Ridero "),
        "Тень и свет"
    );
}

#[test]
fn clean_title_keeps_dash_not_followed_by_promo_word() {
    assert_eq!(
        clean_title("Москва — Петушки. Путешествие"),
        "Москва — Петушки. Путешествие"
    );
}

#[test]
fn clean_title_keeps_promo_word_without_separator() {
    assert_eq!(clean_title("Как читать книги"), "Как читать книги");
}

#[test]
fn clean_title_strips_across_newlines() {
    assert_eq!(clean_title("Тень — купить\nкнигу в магазине"), "Тень");
}

#[test]
fn clean_title_can_empty_a_pure_suffix() {
    assert_eq!(clean_title("| Ridero"), "");
}

#[test]
fn clean_title_is_idempotent() {
    let samples = [
        "",
        "   ",
        "Тень и свет",
        "Тень и свет — купить книгу | Ridero",
        "a - купить - читать | b | c",
        "x | y — купить",
        "Книга - книга - книга",
        "Тень\n— читать\n| x",
        "— купить",
        "Москва — Петушки",
        "|||",
        " - КУПИТЬ",
    ];
    for s in samples {
        let once = clean_title(s);
        assert_eq!(clean_title(&once), once, "not idempotent for {s:?}");
    }
}

// -----------------------------------------------------------------------
// clean_description
// -----------------------------------------------------------------------

#[test]
fn clean_description_strips_buy_call_to_action() {
    assert_eq!(
        clean_description("Роман о выборе. Купите книгу на Ridero!"),
        "Роман о выборе."
    );
    assert_eq!(
        clean_description("Роман о выборе. Купи книгу прямо сейчас"),
        "Роман о выборе."
    );
}

#[test]
fn clean_description_strips_read_online_call_to_action() {
    assert_eq!(
        clean_description("Роман о выборе. Читайте онлайн или скачайте."),
        "Роман о выборе."
    );
}

#[test]
fn clean_description_is_case_insensitive() {
    assert_eq!(
        clean_description("Роман. КУПИТЕ КНИГУ сегодня"),
        "Роман."
    );
}

#[test]
fn clean_description_keeps_plain_text() {
    let text = "Сборник рассказов о том, как купить счастье.";
    assert_eq!(clean_description(text), text);
}

#[test]
fn clean_description_is_idempotent() {
    let samples = [
        "",
        "Роман о выборе.",
        "Роман. Купите книгу. Читайте онлайн.",
        "Читай онлайн Купи книгу",
        "Купите  книгу\nи читайте онлайн",
    ];
    for s in samples {
        let once = clean_description(s);
        assert_eq!(clean_description(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn custom_profile_suffixes_apply_in_order() {
    let mut patterns = bookreel_core::ProfilePatterns::ridero();
    patterns.title_suffixes = vec![r"(?s)\s*\(.*$".to_string()];
    let profile = ExtractionProfile::compile(&patterns).expect("valid profile");
    assert_eq!(profile.clean_title("Тень (2-е издание)"), "Тень");
    // Pipe stripping belongs to the built-in profile only.
    assert_eq!(profile.clean_title("Тень | Ridero"), "Тень | Ridero");
}
