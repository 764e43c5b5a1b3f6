//! Native DOM element and event name tables.

/// Native HTML element tag names, lower-case.
///
/// Custom elements (anything with a dash that is not listed here, or any
/// unknown name) are deliberately absent; predicates treat unknown tags as
/// components with unknowable semantics.
pub(crate) const DOM_ELEMENTS: &[&str] = &[
    "a",
    "abbr",
    "address",
    "area",
    "article",
    "aside",
    "audio",
    "b",
    "base",
    "bdi",
    "bdo",
    "blockquote",
    "body",
    "br",
    "button",
    "canvas",
    "caption",
    "cite",
    "code",
    "col",
    "colgroup",
    "data",
    "datalist",
    "dd",
    "del",
    "details",
    "dfn",
    "dialog",
    "div",
    "dl",
    "dt",
    "em",
    "embed",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hgroup",
    "hr",
    "html",
    "i",
    "iframe",
    "img",
    "input",
    "ins",
    "kbd",
    "label",
    "legend",
    "li",
    "link",
    "main",
    "map",
    "mark",
    "marquee",
    "math",
    "menu",
    "menuitem",
    "meta",
    "meter",
    "nav",
    "noscript",
    "object",
    "ol",
    "optgroup",
    "option",
    "output",
    "p",
    "picture",
    "pre",
    "progress",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "script",
    "search",
    "section",
    "select",
    "slot",
    "small",
    "source",
    "span",
    "strong",
    "style",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "td",
    "template",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "time",
    "title",
    "tr",
    "track",
    "u",
    "ul",
    "var",
    "video",
    "wbr",
];

/// Known native DOM event names.
///
/// Used to forbid custom outputs whose names would shadow a native event
/// (a `(change)` listener on a component with a custom `change` output is
/// ambiguous to readers and to the framework).
pub(crate) const NATIVE_EVENT_NAMES: &[&str] = &[
    "abort",
    "afterprint",
    "animationcancel",
    "animationend",
    "animationiteration",
    "animationstart",
    "appinstalled",
    "audioend",
    "audioprocess",
    "audiostart",
    "auxclick",
    "beforeinput",
    "beforeprint",
    "beforeunload",
    "beginEvent",
    "blocked",
    "blur",
    "boundary",
    "cached",
    "canplay",
    "canplaythrough",
    "change",
    "chargingchange",
    "chargingtimechange",
    "checking",
    "click",
    "close",
    "complete",
    "compositionend",
    "compositionstart",
    "compositionupdate",
    "contextmenu",
    "copy",
    "cut",
    "dblclick",
    "devicechange",
    "devicelight",
    "devicemotion",
    "deviceorientation",
    "deviceproximity",
    "dischargingtimechange",
    "downloading",
    "drag",
    "dragend",
    "dragenter",
    "dragleave",
    "dragover",
    "dragstart",
    "drop",
    "durationchange",
    "emptied",
    "end",
    "endEvent",
    "ended",
    "error",
    "focus",
    "focusin",
    "focusout",
    "fullscreenchange",
    "fullscreenerror",
    "gamepadconnected",
    "gamepaddisconnected",
    "gotpointercapture",
    "hashchange",
    "input",
    "invalid",
    "keydown",
    "keypress",
    "keyup",
    "languagechange",
    "levelchange",
    "load",
    "loadeddata",
    "loadedmetadata",
    "loadend",
    "loadstart",
    "lostpointercapture",
    "mark",
    "message",
    "messageerror",
    "mousedown",
    "mouseenter",
    "mouseleave",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
    "nomatch",
    "notificationclick",
    "noupdate",
    "obsolete",
    "offline",
    "online",
    "open",
    "orientationchange",
    "pagehide",
    "pageshow",
    "paste",
    "pause",
    "play",
    "playing",
    "pointercancel",
    "pointerdown",
    "pointerenter",
    "pointerleave",
    "pointerlockchange",
    "pointerlockerror",
    "pointermove",
    "pointerout",
    "pointerover",
    "pointerup",
    "popstate",
    "progress",
    "push",
    "pushsubscriptionchange",
    "ratechange",
    "readystatechange",
    "repeatEvent",
    "reset",
    "resize",
    "resourcetimingbufferfull",
    "result",
    "resume",
    "scroll",
    "seeked",
    "seeking",
    "select",
    "selectionchange",
    "selectstart",
    "show",
    "slotchange",
    "soundend",
    "soundstart",
    "speechend",
    "speechstart",
    "stalled",
    "start",
    "storage",
    "submit",
    "success",
    "suspend",
    "timeout",
    "timeupdate",
    "toggle",
    "touchcancel",
    "touchend",
    "touchmove",
    "touchstart",
    "transitioncancel",
    "transitionend",
    "transitionrun",
    "transitionstart",
    "unload",
    "updateready",
    "upgradeneeded",
    "userproximity",
    "versionchange",
    "visibilitychange",
    "voiceschanged",
    "volumechange",
    "waiting",
    "wheel",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_elements_are_lowercase_and_sorted() {
        for pair in DOM_ELEMENTS.windows(2) {
            assert!(pair[0] < pair[1], "out of order: {} >= {}", pair[0], pair[1]);
        }
        assert!(DOM_ELEMENTS.iter().all(|e| *e == e.to_lowercase()));
    }

    #[test]
    fn common_events_are_known() {
        for event in ["click", "change", "keydown", "pointerdown", "cut"] {
            assert!(NATIVE_EVENT_NAMES.contains(&event), "missing {event}");
        }
    }

    #[test]
    fn custom_output_names_are_not_native() {
        for name in ["valueChange", "saved", "myEvent"] {
            assert!(!NATIVE_EVENT_NAMES.contains(&name));
        }
    }
}
