use maud::{html, Markup};

const UTTERANCES_SCRIPT: &str = "https://utteranc.es/client.js";
/// Comments container the widget script mounts into.
pub const COMMENTS_CONTAINER_ID: &str = "inject-comments-for-uterances";

/// utterances embed. Issues are mapped to posts by pathname.
pub fn utterances(repo: &str, theme: &str) -> Markup {
    html! {
        div id=(COMMENTS_CONTAINER_ID) {
            script
                src=(UTTERANCES_SCRIPT)
                repo=(repo)
                issue-term="pathname"
                theme=(theme)
                crossorigin="anonymous"
                async {}
        }
    }
}
