use crate::app::config::{APP_NAME, APP_TAGLINE};

const STYLE: &str = "
    * { box-sizing: border-box; }
    body { margin: 0; font-family: system-ui, sans-serif; display: flex; min-height: 100vh; color: #1f2328; }
    aside { width: 300px; padding: 1.5rem; background: #f0f2f6; flex-shrink: 0; }
    main { flex: 1; padding: 1.5rem 2.5rem; min-width: 0; }
    input[type=password], textarea, select { width: 100%; padding: .5rem; margin: .25rem 0 .75rem; font: inherit; }
    button { padding: .45rem .9rem; font: inherit; cursor: pointer; }
    .columns { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
    .gallery { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }
    .gallery img { width: 150px; max-width: 100%; display: block; margin-bottom: .25rem; }
    .gallery form { display: inline; }
    figure { margin: 0; }
    figure img { width: 100%; }
    figcaption { color: #6b7280; font-size: .875rem; text-align: center; }
    .notice { padding: .75rem 1rem; border-radius: .5rem; margin: .5rem 0; }
    .notice.success { background: #dcfce7; }
    .notice.info { background: #dbeafe; }
    .notice.warning { background: #fef9c3; }
    .notice.error { background: #fee2e2; }
    .spinner { color: #6b7280; }
";

pub fn layout_template(sidebar: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"utf-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    <aside>{}</aside>
    <main>
        <h1>{}</h1>
        <p>{}</p>
        {}
    </main>
</body>
</html>
",
        APP_NAME, STYLE, sidebar, APP_NAME, APP_TAGLINE, main
    )
}
