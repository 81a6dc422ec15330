use super::*;

fn ridero() -> &'static ExtractionProfile {
    ExtractionProfile::ridero()
}

// -----------------------------------------------------------------------
// title / description / cover
// -----------------------------------------------------------------------

#[test]
fn title_prefers_og_title_over_heading() {
    let html = r#"<meta property="og:title" content="Из мета"><h1>Из заголовка</h1>"#;
    assert_eq!(extract_title(html, ridero()).as_deref(), Some("Из мета"));
}

#[test]
fn title_falls_back_to_first_heading() {
    let html = "<body><h1>  Тень и свет </h1><h1>Второй</h1></body>";
    assert_eq!(extract_title(html, ridero()).as_deref(), Some("Тень и свет"));
}

#[test]
fn title_skips_og_title_that_is_only_boilerplate() {
    let html = r#"<meta property="og:title" content="| Ridero"><h1>Тень и свет</h1>"#;
    assert_eq!(extract_title(html, ridero()).as_deref(), Some("Тень и свет"));
}

#[test]
fn title_misses_without_signals() {
    assert_eq!(extract_title("<html></html>", ridero()), None);
}

#[test]
fn description_and_cover_come_from_open_graph() {
    let html = r#"
        <meta content="Роман о выборе." property="og:description">
        <meta property="og:image" content="https://ridero.ru/img/cover.jpg">
    "#;
    assert_eq!(extract_description(html).as_deref(), Some("Роман о выборе."));
    assert_eq!(
        extract_cover_url(html).as_deref(),
        Some("https://ridero.ru/img/cover.jpg")
    );
}

// -----------------------------------------------------------------------
// author
// -----------------------------------------------------------------------

#[test]
fn author_json_ld_beats_class_heuristic() {
    let html = r#"
        <script type="application/ld+json">{"@type": "Book", "author": {"name": "X"}}</script>
        <div class="book-author">Y</div>
    "#;
    assert_eq!(extract_author(html, ridero()).as_deref(), Some("X"));
}

#[test]
fn author_from_class_attribute() {
    let html = r#"<a class="book__author-link" href="/a">Иван Петров</a>"#;
    assert_eq!(extract_author(html, ridero()).as_deref(), Some("Иван Петров"));
}

#[test]
fn author_from_localized_label() {
    let html = r#"<p>Автор: <a href="/authors/smirnova">Анна Смирнова</a></p>"#;
    assert_eq!(extract_author(html, ridero()).as_deref(), Some("Анна Смирнова"));
}

#[test]
fn author_from_itemprop() {
    let html = r#"<span itemprop="author">Лев Толстой</span>"#;
    assert_eq!(extract_author(html, ridero()).as_deref(), Some("Лев Толстой"));
}

#[test]
fn author_skips_blank_capture_and_continues_cascade() {
    let html = r#"<div class="author">   </div><span itemprop="author">Найден</span>"#;
    assert_eq!(extract_author(html, ridero()).as_deref(), Some("Найден"));
}

#[test]
fn author_falls_through_malformed_json_ld() {
    let html = r#"
        <script type="application/ld+json">{ not json </script>
        <span class="author">Эвристика</span>
    "#;
    assert_eq!(extract_author(html, ridero()).as_deref(), Some("Эвристика"));
}

// -----------------------------------------------------------------------
// genre
// -----------------------------------------------------------------------

#[test]
fn genre_label_outranks_class_attribute() {
    let html = r#"<span class="genre">Класс</span> Жанр: <a href="/g">Фэнтези</a>"#;
    assert_eq!(extract_genre(html, ridero()).as_deref(), Some("Фэнтези"));
}

#[test]
fn genre_from_class_attribute() {
    let html = r#"<li class="book-genre">Детектив</li>"#;
    assert_eq!(extract_genre(html, ridero()).as_deref(), Some("Детектив"));
}

#[test]
fn genre_from_itemprop() {
    let html = r#"<meta itemprop="genre"><span itemprop="genre">Поэзия</span>"#;
    assert_eq!(extract_genre(html, ridero()).as_deref(), Some("Поэзия"));
}

// -----------------------------------------------------------------------
// pages / age rating
// -----------------------------------------------------------------------

#[test]
fn pages_before_marker_word() {
    assert_eq!(extract_pages("<p>312 страниц</p>", ridero()), Some(312));
    assert_eq!(extract_pages("<p>148 стр.</p>", ridero()), Some(148));
    assert_eq!(extract_pages("<p>96 Pages</p>", ridero()), Some(96));
}

#[test]
fn pages_after_volume_label() {
    assert_eq!(extract_pages("Объём: 240", ridero()), Some(240));
}

#[test]
fn pages_skips_overflowing_number() {
    let html = "99999999999 страниц, позже 120 стр.";
    assert_eq!(extract_pages(html, ridero()), Some(120));
}

#[test]
fn pages_absent_without_marker() {
    assert_eq!(extract_pages("<p>312</p>", ridero()), None);
}

#[test]
fn age_rating_is_first_plus_token() {
    assert_eq!(
        extract_age_rating("<span>16+ only</span> 18+", ridero()).as_deref(),
        Some("16+")
    );
    assert_eq!(extract_age_rating("<span>нет</span>", ridero()), None);
}

// -----------------------------------------------------------------------
// rating / review count
// -----------------------------------------------------------------------

#[test]
fn rating_from_itemprop_text() {
    let html = r#"<span itemprop="ratingValue">4.6</span>"#;
    assert_eq!(extract_rating(html, ridero()), Some(4.6));
}

#[test]
fn rating_from_itemprop_content_attribute() {
    let html = r#"<meta itemprop="ratingValue" content="4,2">"#;
    assert_eq!(extract_rating(html, ridero()), Some(4.2));
}

#[test]
fn rating_decimal_comma_out_of_five() {
    assert_eq!(extract_rating("<b>4,8 из 5</b>", ridero()), Some(4.8));
    assert_eq!(extract_rating("<b>3.9 / 5</b>", ridero()), Some(3.9));
    assert_eq!(extract_rating("<b>4.1★</b>", ridero()), Some(4.1));
}

#[test]
fn rating_absent_without_signal() {
    assert_eq!(extract_rating("<b>5 звёзд</b>", ridero()), None);
}

#[test]
fn rating_skips_unparseable_structured_value() {
    let html = r#"<span itemprop="ratingValue">4.5.1</span> 4,4 из 5"#;
    assert_eq!(extract_rating(html, ridero()), Some(4.4));
}

#[test]
fn review_count_from_itemprop() {
    let html = r#"<span itemprop="reviewCount">27</span> 3 отзыва"#;
    assert_eq!(extract_review_count(html, ridero()), Some(27));
}

#[test]
fn review_count_from_text() {
    assert_eq!(extract_review_count("<a>12 отзывов</a>", ridero()), Some(12));
    assert_eq!(extract_review_count("<a>5 reviews</a>", ridero()), Some(5));
    assert_eq!(extract_review_count("<a>нет отзывов</a>", ridero()), None);
}

// -----------------------------------------------------------------------
// author bio
// -----------------------------------------------------------------------

fn bio_html(text: &str) -> String {
    format!(r#"<div class="author-bio">{text}</div>"#)
}

#[test]
fn author_bio_after_localized_label() {
    let html = "<h3>Об авторе: <span>Писатель и путешественник из Казани.</span></h3>";
    assert_eq!(
        extract_author_bio(html, ridero()).as_deref(),
        Some("Писатель и путешественник из Казани.")
    );
}

#[test]
fn author_bio_rejects_short_text() {
    assert_eq!(extract_author_bio(&bio_html("Коротко."), ridero()), None);
    assert_eq!(extract_author_bio(&bio_html(&"а".repeat(19)), ridero()), None);
}

#[test]
fn author_bio_accepts_window_bounds() {
    let at_min = "б".repeat(20);
    let at_max = "в".repeat(500);
    assert_eq!(
        extract_author_bio(&bio_html(&at_min), ridero()).as_deref(),
        Some(at_min.as_str())
    );
    assert_eq!(
        extract_author_bio(&bio_html(&at_max), ridero()).as_deref(),
        Some(at_max.as_str())
    );
}

#[test]
fn author_bio_rejects_over_long_text() {
    assert_eq!(extract_author_bio(&bio_html(&"г".repeat(501)), ridero()), None);
}

#[test]
fn author_bio_tries_next_candidate_after_rejection() {
    let html = format!(
        "{}{}",
        bio_html("слишком коротко"),
        bio_html("Автор трёх романов и сборника рассказов.")
    );
    assert_eq!(
        extract_author_bio(&html, ridero()).as_deref(),
        Some("Автор трёх романов и сборника рассказов.")
    );
}
