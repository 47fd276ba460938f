use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:#1a1d23;color:#d7d7d7;font-family:Inter,sans-serif;line-height:1.6}
a{color:inherit;text-decoration:none}
.container{max-width:1120px;margin:0 auto;padding:0 2rem}
.content{max-width:720px;margin:0 auto}
.header{padding:4rem 0 3rem}
.logo{font-size:1.6rem;font-weight:700;color:#fff}
.logo span{color:#ff57b2}
.info{display:flex;gap:1.5rem;margin-top:1.5rem;font-size:.875rem;color:#bbb}
.post-item{display:block;margin-bottom:3rem}
.post-item strong{display:block;font-size:1.75rem;color:#fff}
.post-item p{margin-top:.5rem;font-size:1.1rem}
.more-posts{display:inline-block;margin:1rem 0 4rem;color:#ff57b2;font-weight:600}
.banner img{display:block;width:100%;height:400px;object-fit:cover}
.post h1{margin-top:5rem;font-size:3rem;color:#fff}
.edited{margin-top:1rem;font-size:.875rem;font-style:italic;color:#bbb}
.block{margin-top:4rem}
.block h2{font-size:2.25rem;color:#fff}
.block-body{margin-top:2rem;font-size:1.125rem}
.block-body p,.block-body ul,.block-body ol,.block-body pre{margin-bottom:1rem}
.neighbors{display:flex;justify-content:space-between;margin-top:4rem;padding-top:3rem;border-top:1px solid #333}
.neighbors a span{display:block;color:#ff57b2;font-size:.875rem}
.neighbors .next{margin-left:auto;text-align:right}
#inject-comments-for-uterances{margin:4rem 0}
.error-page{padding:4rem 0}
.error-page a{color:#ff57b2}
"#;

/// Full document: head, site header and `body`.
pub fn page_shell(title: &str, site_name: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (site_name) }
                link rel="preconnect" href="https://fonts.gstatic.com";
                link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap" rel="stylesheet";
                link rel="shortcut icon" href="/favicon.ico" type="image/x-icon";
                style { (PreEscaped(STYLE)) }
            }
            body {
                (header(site_name))
                (body)
            }
        }
    }
}

fn header(site_name: &str) -> Markup {
    html! {
        header class="container header" {
            div class="content" {
                a class="logo" href="/" aria-label="Página inicial" {
                    (site_name) span { "." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_has_title_and_fonts() {
        let page = page_shell("Home", "spacetraveling", html! { p { "hi" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Home | spacetraveling</title>"));
        assert!(page.contains("fonts.googleapis.com"));
        assert!(page.contains("<p>hi</p>"));
    }
}
