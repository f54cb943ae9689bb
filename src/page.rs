//! DOM rendering and event wiring for the reading page.
//!
//! Everything here is templating glue around the core modules: quiz cards,
//! flip flashcards, the score badge, the phonics side panel and the
//! "fetch more stories" section. The host page provides the containers
//! (`#quiz1`, `#answers1`, `#phonicsList`, ...) and the story paragraphs.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, window};

use crate::fireworks;
use crate::phonics;
use crate::quiz::{self, QuizItem};
use crate::stories;

pub fn start_page() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    render_quiz(&doc, "quiz1", quiz::STORY1_QUIZ, "s1")?;
    render_quiz(&doc, "quiz2", quiz::STORY2_QUIZ, "s2")?;
    build_answer_cards(&doc, "answers1", quiz::STORY1_ANSWERS, "Story 1")?;
    build_answer_cards(&doc, "answers2", quiz::STORY2_ANSWERS, "Story 2")?;
    apply_phonics(&doc)?;
    wire_events(&doc)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Quiz rendering & scoring
// -----------------------------------------------------------------------------

fn render_quiz(
    doc: &Document,
    container_id: &str,
    items: &[QuizItem],
    prefix: &str,
) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id(container_id) else {
        return Ok(());
    };
    container.set_inner_html("");
    for (idx, item) in items.iter().enumerate() {
        let col = doc.create_element("div")?;
        col.set_class_name("col-12 col-lg-6");
        let card = doc.create_element("div")?;
        card.set_class_name("question");
        let mut html = format!(
            "<p class=\"fw-semibold mb-2\">{}. {}</p>",
            idx + 1,
            escape_html(item.prompt)
        );
        for (i, opt) in item.options.iter().enumerate() {
            html.push_str(&format!(
                "<div class=\"form-check\">\
                   <input class=\"form-check-input\" type=\"radio\" \
                          name=\"{prefix}-{idx}\" id=\"{prefix}-{idx}-{i}\" value=\"{i}\">\
                   <label class=\"form-check-label\" for=\"{prefix}-{idx}-{i}\">{}</label>\
                 </div>",
                escape_html(opt)
            ));
        }
        card.set_inner_html(&html);
        col.append_child(&card)?;
        container.append_child(&col)?;
    }
    Ok(())
}

/// Reads the checked radio per question; `None` where nothing is selected.
fn read_choices(doc: &Document, prefix: &str, count: usize) -> Vec<Option<usize>> {
    (0..count)
        .map(|idx| {
            doc.query_selector(&format!("input[name=\"{prefix}-{idx}\"]:checked"))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.value().parse().ok())
        })
        .collect()
}

fn update_score_badge(doc: &Document, score: usize) -> Result<(), JsValue> {
    let Some(badge) = doc.get_element_by_id("scoreBadge") else {
        return Ok(());
    };
    badge.set_text_content(Some(&format!(
        "Score: {score} / {}",
        quiz::TOTAL_QUESTIONS
    )));
    let classes = badge.class_list();
    classes.remove_3("text-bg-success", "text-bg-danger", "text-bg-warning")?;
    classes.add_1(quiz::badge_class(score))?;
    Ok(())
}

fn check_all(doc: &Document) -> Result<(), JsValue> {
    let mut score = quiz::tally(
        &read_choices(doc, "s1", quiz::STORY1_QUIZ.len()),
        quiz::STORY1_QUIZ,
    );
    score += quiz::tally(
        &read_choices(doc, "s2", quiz::STORY2_QUIZ.len()),
        quiz::STORY2_QUIZ,
    );
    update_score_badge(doc, score)?;
    if quiz::is_perfect(score) {
        fireworks::launch()?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Footer flashcard answers
// -----------------------------------------------------------------------------

fn build_answer_cards(
    doc: &Document,
    container_id: &str,
    answers: &[&str],
    label: &str,
) -> Result<(), JsValue> {
    let Some(wrap) = doc.get_element_by_id(container_id) else {
        return Ok(());
    };
    wrap.set_inner_html(""); // rebuild fresh
    for (i, text) in answers.iter().enumerate() {
        let col = doc.create_element("div")?;
        col.set_class_name("col-12 col-md-6 col-lg-4");
        col.set_inner_html(&format!(
            "<div class=\"answer-card card\">\
               <div class=\"answer-inner\">\
                 <div class=\"answer-face d-flex flex-column justify-content-between\">\
                   <strong>{label} \u{2014} Answer {n}</strong>\
                   <button class=\"btn answer-btn mt-2 w-100\" type=\"button\">Click me</button>\
                 </div>\
                 <div class=\"answer-face answer-back\">\
                   <p class=\"m-0\"><strong>A{n}:</strong> {body}</p>\
                 </div>\
               </div>\
             </div>",
            n = i + 1,
            body = escape_html(text)
        ));
        wrap.append_child(&col)?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Phonics pass
// -----------------------------------------------------------------------------

/// Runs the scanner over every `.story-paragraph`, writes back the annotated
/// markup and fills the side panel of matched words per pattern.
fn apply_phonics(doc: &Document) -> Result<(), JsValue> {
    let paras = doc.query_selector_all(".story-paragraph")?;
    let mut elements: Vec<Element> = Vec::new();
    for i in 0..paras.length() {
        if let Some(el) = paras.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            elements.push(el);
        }
    }
    let texts: Vec<String> = elements.iter().map(|el| el.inner_html()).collect();
    let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
    let result = phonics::scan(&refs);
    for (el, annotated) in elements.iter().zip(&result.paragraphs) {
        el.set_inner_html(annotated);
    }
    render_phonics_list(doc, &result)
}

fn render_phonics_list(doc: &Document, result: &phonics::ScanResult) -> Result<(), JsValue> {
    let Some(list) = doc.get_element_by_id("phonicsList") else {
        return Ok(());
    };
    list.set_inner_html("");
    for bucket in &result.buckets {
        let col = doc.create_element("div")?;
        col.set_class_name("col-12 col-md-6 col-lg-4");
        let words = if bucket.words.is_empty() {
            "<em>Will appear here as you read!</em>".to_string()
        } else {
            bucket
                .words
                .iter()
                .map(|w| format!("<u>{}</u>", escape_html(w)))
                .collect::<Vec<_>>()
                .join(", ")
        };
        col.set_inner_html(&format!(
            "<div class=\"card h-100\">\
               <div class=\"card-body\">\
                 <h3 class=\"h6 mb-2\"><span class=\"badge phonics-badge\">{}</span> words</h3>\
                 <p class=\"phonics-word mb-0\">{words}</p>\
               </div>\
             </div>",
            bucket.pattern
        ));
        list.append_child(&col)?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Fetched stories (mock intercept)
// -----------------------------------------------------------------------------

fn load_stories(doc: &Document) -> Result<(), JsValue> {
    let rendered = stories::respond("GET", stories::STORIES_PATH)
        .and_then(|json| stories::parse_payload(&json).ok())
        .map(|payload| render_fetched_stories(doc, &payload.stories));
    match rendered {
        Some(result) => result,
        None => {
            web_sys::console::error_1(&JsValue::from_str("story request was not handled"));
            render_fetch_error(doc)
        }
    }
}

fn render_fetched_stories(
    doc: &Document,
    fetched: &[stories::FetchedStory],
) -> Result<(), JsValue> {
    let Some(wrap) = doc.get_element_by_id("fetchedStories") else {
        return Ok(());
    };
    wrap.set_inner_html("");
    if fetched.is_empty() {
        wrap.set_inner_html(
            "<div class=\"col-12\"><div class=\"alert alert-warning\">No stories found.</div></div>",
        );
        return Ok(());
    }
    for story in fetched {
        let col = doc.create_element("div")?;
        col.set_class_name("col-12 col-lg-6");
        col.set_inner_html(&format!(
            "<div class=\"card h-100\">\
               <div class=\"card-body d-flex flex-column\">\
                 <h3 class=\"h5 text-primary\">{}</h3>\
                 <p class=\"mb-3\">{}</p>\
                 <div class=\"mt-auto\">\
                   <h4 class=\"h6 text-secondary\">Questions (placeholder)</h4>\
                   <ol class=\"mb-2\">\
                     <li>Who is the main character?</li>\
                     <li>What fun thing happens?</li>\
                   </ol>\
                   <h4 class=\"h6 text-secondary\">Answers (placeholder)</h4>\
                   <ul class=\"mb-0\">\
                     <li>(Write the answer here)</li>\
                     <li>(Write the answer here)</li>\
                   </ul>\
                 </div>\
               </div>\
             </div>",
            escape_html(&story.title),
            escape_html(&story.body)
        ));
        wrap.append_child(&col)?;
    }
    Ok(())
}

fn render_fetch_error(doc: &Document) -> Result<(), JsValue> {
    if let Some(wrap) = doc.get_element_by_id("fetchedStories") {
        wrap.set_inner_html(
            "<div class=\"col-12\"><div class=\"alert alert-danger\">\
               Could not fetch stories right now. Please try again.\
             </div></div>",
        );
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Event wiring
// -----------------------------------------------------------------------------

fn on_click(doc: &Document, id: &str, handler: Box<dyn FnMut()>) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id(id) else {
        return Ok(());
    };
    let closure = Closure::wrap(handler);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_events(doc: &Document) -> Result<(), JsValue> {
    // Flashcard flipping via document-level click delegation.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let Some(target) = evt.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if !target.class_list().contains("answer-btn") {
                return;
            }
            if let Ok(Some(card)) = target.closest(".answer-card") {
                let _ = card.class_list().toggle("flipped");
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let doc_check = doc.clone();
        on_click(
            doc,
            "checkAllBtn",
            Box::new(move || {
                let _ = check_all(&doc_check);
            }),
        )?;
    }
    {
        let doc_load = doc.clone();
        on_click(
            doc,
            "loadStoriesBtn",
            Box::new(move || {
                let _ = load_stories(&doc_load);
            }),
        )?;
    }
    on_click(
        doc,
        "closeCelebrate",
        Box::new(move || {
            let _ = fireworks::dismiss();
        }),
    )?;
    on_click(
        doc,
        "printBtn",
        Box::new(move || {
            if let Some(win) = window() {
                let _ = win.print();
            }
        }),
    )?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Escapes text interpolated into `set_inner_html` markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
