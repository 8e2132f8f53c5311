//! Scroll-triggered reveal of page blocks.
//!
//! Elements carrying [`REVEAL_CLASS`] stay hidden until they first scroll into
//! view, at which point an observer adds [`IN_VIEW_CLASS`] and the stylesheet
//! plays the fade-in. Hiding is keyed on [`READY_CLASS`] on the document root,
//! which is only set once an observer is installed, so content stays visible
//! wherever observation is unsupported.

pub const REVEAL_CLASS: &str = "reveal";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const READY_CLASS: &str = "reveal-ready";

/// Share of an element that must be visible before it is revealed.
pub const THRESHOLD: f64 = 0.1;

/// Standalone script for hosts that can only evaluate JavaScript.
pub const REVEAL_SCRIPT: &str = "(function(){if(!('IntersectionObserver' in window)){return;}var o=new IntersectionObserver(function(es){es.forEach(function(e){if(e.isIntersecting){e.target.classList.add('in-view');o.unobserve(e.target);}});},{threshold:0.1});document.documentElement.classList.add('reveal-ready');document.querySelectorAll('.reveal:not(.in-view)').forEach(function(el){o.observe(el);});})();";

/// Selector for the elements still waiting to be revealed.
pub fn pending_selector() -> String {
    format!(".{REVEAL_CLASS}:not(.{IN_VIEW_CLASS})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_matches_constants() {
        assert!(REVEAL_SCRIPT.contains(&format!("classList.add('{IN_VIEW_CLASS}')")));
        assert!(REVEAL_SCRIPT.contains(&format!("classList.add('{READY_CLASS}')")));
        assert!(REVEAL_SCRIPT.contains(&format!("querySelectorAll('{}')", pending_selector())));
        assert!(REVEAL_SCRIPT.contains(&format!("threshold:{THRESHOLD}")));
    }

    #[test]
    fn ready_class_is_set_only_after_support_check() {
        let guard = REVEAL_SCRIPT.find("'IntersectionObserver' in window").unwrap();
        let ready = REVEAL_SCRIPT.find(READY_CLASS).unwrap();
        assert!(guard < ready);
    }

    #[test]
    fn pending_selector_skips_revealed() {
        assert_eq!(pending_selector(), ".reveal:not(.in-view)");
    }
}
