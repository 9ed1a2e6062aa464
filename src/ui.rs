use crate::display::VISITOR_COUNT_ID;
use crate::scroll::{SCROLL_TARGET_ID, SCROLL_TRIGGER_ID};

/// Page shell carrying the elements the wasm client renders into.
pub fn render_page() -> String {
    PAGE_HTML
        .replace("{{COUNT_ID}}", VISITOR_COUNT_ID)
        .replace("{{TRIGGER_ID}}", SCROLL_TRIGGER_ID)
        .replace("{{SECTION_ID}}", SCROLL_TARGET_ID)
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Visitor Counter</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    .hero {
      min-height: 100vh;
      display: grid;
      place-items: center;
      text-align: center;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    #{{SECTION_ID}} {
      min-height: 60vh;
      display: grid;
      place-items: center;
    }

    #{{COUNT_ID}} {
      background: var(--card);
      border-radius: 18px;
      padding: 18px 28px;
      font-size: 1.4rem;
      box-shadow: 0 12px 32px rgba(47, 72, 88, 0.16);
    }
  </style>
</head>
<body>
  <section class="hero">
    <div>
      <h1>Welcome</h1>
      <button id="{{TRIGGER_ID}}" type="button">Show visitor count</button>
    </div>
  </section>

  <section id="{{SECTION_ID}}">
    <p id="{{COUNT_ID}}"></p>
  </section>

  <script type="module">
    import init from '/pkg/visitor_counter.js';
    init();
  </script>
</body>
</html>
"#;
