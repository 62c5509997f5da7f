use maud::{html, Markup, PreEscaped, DOCTYPE};

// Styles are embedded so the binary serves everything itself; there is no
// static asset route.
const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
header.topbar { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header.topbar h3 { margin: 0; }
header.topbar nav ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0; }
header.topbar a { color: #524ed2; text-decoration: none; }
main.container { max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
div.card { background: white; border-radius: 8px; padding: 1.5rem; margin-bottom: 2rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
label { display: block; margin: 0.75rem 0 0.25rem; font-weight: 600; }
input, select { padding: 8px; border: 1px solid #ccc; border-radius: 4px; width: 100%; box-sizing: border-box; }
fieldset { border: 1px solid #e5e7eb; border-radius: 6px; margin-top: 1rem; }
fieldset label { display: inline-flex; align-items: center; gap: 6px; font-weight: normal; margin-right: 1rem; }
fieldset input[type=checkbox] { width: auto; }
button[type=submit] { margin-top: 1.5rem; padding: 10px 20px; background: #524ed2; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 1rem; }
progress { width: 100%; height: 1.25rem; margin-top: 0.5rem; }
p.hint { color: #6b7280; font-size: 0.9em; margin-top: 0.25rem; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="topbar" {
                    h3 { "NYC Rent Analyzer" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
