use crate::constants::*;
use crate::core::{generate_hearts, rise_opacity};
use crate::dom::{self, DomError};
use web_sys as web;

/// Empty backdrop shown until the page is mounted.
pub fn render_placeholder(root: &web::Element) {
    root.set_inner_html(&format!(
        "<div class='backdrop' style='min-height:100vh;background:{}'></div>",
        BACKDROP_COLOR
    ));
}

/// Build the page shell and the question pane inside `#app-root`.
pub fn mount(document: &web::Document) -> Result<(), DomError> {
    document.set_title(DOCUMENT_TITLE);
    install_rise_keyframes(document)?;
    let root = dom::require_element(document, ROOT_ID)?;
    root.set_inner_html(&format!(
        "<main class='page'>\
           <div id='{HEARTS_LAYER_ID}' class='hearts'></div>\
           <div id='{CARD_ID}' class='card'><div id='{PANE_ID}' class='pane {CLASS_ENTERING}'>{}</div></div>\
           <footer class='page-footer'>{PAGE_FOOTER}</footer>\
         </main>",
        question_html()
    ));
    mount_hearts(document)?;
    log::info!("[view] mounted question pane");
    Ok(())
}

/// Fill the background layer with rising hearts. Runs once, after mount.
pub fn mount_hearts(document: &web::Document) -> Result<(), DomError> {
    let layer = dom::require_element(document, HEARTS_LAYER_ID)?;
    let hearts = generate_hearts();
    let mut html = String::with_capacity(hearts.len() * 256);
    for h in &hearts {
        html.push_str(&format!(
            "<div class='heart' data-id='{}' style='{}'>{}</div>",
            h.id,
            h.css_style(),
            heart_svg(h.size_px, HEART_FILL, "transparent")
        ));
    }
    layer.set_inner_html(&html);
    log::info!("[view] {} background hearts", hearts.len());
    Ok(())
}

/// Play the question pane's exit, then swap in the celebration pane.
pub fn show_celebration(document: &web::Document) {
    let Some(pane) = document.get_element_by_id(PANE_ID) else {
        return;
    };
    let cl = pane.class_list();
    _ = cl.remove_1(CLASS_ENTERING);
    _ = cl.add_1(CLASS_EXITING);
    dom::set_timeout(PANE_EXIT_MS, move || {
        pane.set_inner_html(&celebration_html());
        let cl = pane.class_list();
        _ = cl.remove_1(CLASS_EXITING);
        _ = cl.add_1(CLASS_ENTERING);
        log::info!("[view] celebration pane shown");
    });
}

fn install_rise_keyframes(document: &web::Document) -> Result<(), DomError> {
    if document.get_element_by_id(RISE_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(RISE_STYLE_ID);
    style.set_text_content(Some(&rise_keyframes_css()));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

fn rise_keyframes_css() -> String {
    let stops = [0.0_f32, 1.0 / 3.0, 2.0 / 3.0, 1.0];
    let mut css = String::from("@keyframes rise{");
    for s in stops {
        let y = 110.0 - 120.0 * s;
        css.push_str(&format!(
            "{:.2}%{{transform:translateY({:.2}vh);opacity:{:.2}}}",
            s * 100.0,
            y,
            rise_opacity(s)
        ));
    }
    css.push('}');
    css
}

fn heart_svg(size: u32, fill: &str, stroke: &str) -> String {
    format!(
        "<svg width='{size}' height='{size}' viewBox='0 0 24 24' fill='{fill}' stroke='{stroke}'><path d='{HEART_PATH}'/></svg>"
    )
}

fn question_html() -> String {
    format!(
        "<div class='badge pulse'>{}</div>\
         <div class='copy'>\
           <h1 class='title'>{QUESTION_TITLE}</h1>\
           <p class='subtitle'>{QUESTION_SUBTITLE}</p>\
         </div>\
         <div id='{BUTTON_ZONE_ID}' class='button-zone'>\
           <button id='{YES_BUTTON_ID}' class='btn btn-yes'>{YES_LABEL}</button>\
           <div class='no-slot'><button id='{NO_BUTTON_ID}' class='btn btn-no'>{NO_LABEL}</button></div>\
         </div>",
        heart_svg(48, "white", "white")
    )
}

fn celebration_html() -> String {
    format!(
        "<div class='hero'>\
           <div class='wiggle'>{}</div>\
           <span class='stars'>✨</span>\
         </div>\
         <div class='copy'>\
           <h2 class='title title-big'>{CELEBRATION_TITLE}</h2>\
           <p class='subtitle-strong'>{CELEBRATION_SUBTITLE}</p>\
         </div>\
         <div class='note delayed'><span class='gift'>🎁</span><p>{CELEBRATION_NOTE}</p></div>\
         <div class='song'>🎵<span>{CELEBRATION_FOOTER}</span></div>",
        heart_svg(120, HEART_FILL, "white")
    )
}
