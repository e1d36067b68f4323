//! Static rendered-page fixtures used across harnesses.
//!
//! Each fixture is a page in the markup conventions the scanner reads:
//! post elements classed `post-card` or `post-item`, a title link inside an
//! `<h2>`/`<h3>`, an optional `.post-summary`, and any number of `.tag`s.

/// A well-formed generated listing page with three complete post cards.
pub const PAGE_BASIC: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>A Blog</title>
  <link rel="stylesheet" href="/css/main.css">
</head>
<body>
  <main class="post-list">
    <article class="post-card">
      <h2><a href="/posts/intro-to-rust/">Intro to Rust</a></h2>
      <p class="post-summary">Getting started with ownership and borrowing.</p>
      <div class="post-tags">
        <span class="tag">rust</span>
        <span class="tag">systems</span>
      </div>
    </article>
    <article class="post-card">
      <h2><a href="/posts/terminal-colours/">Terminal Colours</a></h2>
      <p class="post-summary">From 8 colours to truecolor.</p>
      <div class="post-tags">
        <span class="tag">cyan</span>
        <span class="tag">tui</span>
      </div>
    </article>
    <article class="post-card">
      <h2><a href="/posts/static-sites/">Static Sites in Anger</a></h2>
      <p class="post-summary">Why I moved the blog to a generator.</p>
      <div class="post-tags">
        <span class="tag">hugo</span>
      </div>
    </article>
  </main>
</body>
</html>
"#;

/// Edge cases the scanner must degrade through rather than fail on:
/// a card with no title link (skipped), a card with no summary or tags
/// (empty fields), the `post-item` class variant, a near-miss class token,
/// and summary/tag elements outside any card (ignored).
pub const PAGE_EDGE_CASES: &str = r#"
<body>
  <p class="post-summary">Orphan summary, outside any card.</p>
  <span class="tag">orphan</span>

  <div class="post-card">
    <h2>No link in this heading</h2>
    <p class="post-summary">This card never becomes an entry.</p>
  </div>

  <div class="post-item">
    <h3><a href="/posts/bare/">Bare Post</a></h3>
  </div>

  <div class="post-cards">
    <h2><a href="/posts/near-miss/">Near Miss</a></h2>
  </div>

  <div class="post-card featured">
    <h2><a href="/posts/featured/">Featured Post</a></h2>
    <p class="post-summary">Multiple classes on the card.</p>
    <span class="tag">meta</span>
  </div>
</body>
"#;

/// What generators actually emit: scripts, comments, void elements,
/// character references, uppercase tag names, and ragged whitespace.
pub const PAGE_MESSY: &str = r#"
<head>
  <script>if (a < b && c > d) { document.write("<div class='post-card'>"); }</script>
  <style>.post-card { color: #fff; }</style>
</head>
<body>
  <!-- rendered by the site generator -->
  <DIV CLASS="post-card">
    <h2>
      <a href="/posts/ampersands/">Q&amp;A &#8212; ampersands
        and dashes</a>
    </h2>
    <p class="post-summary">
      Entities like &hellip; and &nbsp;resolve;<br>
      void elements do not nest.
      <img src="/img/x.png">
    </p>
    <span class="tag">Q&amp;A</span>
  </DIV>
</body>
"#;

/// A listing page with `n` generated post cards, for scale tests and
/// benchmarks.
pub fn page_with_cards(n: usize) -> String {
    let mut page = String::from("<body><main class=\"post-list\">\n");
    for i in 0..n {
        page.push_str(&format!(
            r#"<article class="post-card">
  <h2><a href="/posts/{i}/">Generated Post {i}</a></h2>
  <p class="post-summary">Summary text for generated post number {i}.</p>
  <span class="tag">gen</span>
  <span class="tag">batch-{}</span>
</article>
"#,
            i % 10
        ));
    }
    page.push_str("</main></body>\n");
    page
}
