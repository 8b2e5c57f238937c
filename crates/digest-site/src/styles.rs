//! Fixed inline stylesheet shared by all documents.

/// Stylesheet inlined into every document. No per-request variation.
pub(crate) const STYLES: &str = "
  * { box-sizing: border-box; }
  body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    background: #0d1117;
    color: #c9d1d9;
    line-height: 1.6;
  }
  h1, h2, h3 { color: #58a6ff; }
  h1 { border-bottom: 1px solid #30363d; padding-bottom: 10px; }
  a { color: #58a6ff; text-decoration: none; }
  a:hover { text-decoration: underline; }
  .post-list { list-style: none; padding: 0; }
  .post-list li {
    padding: 15px;
    margin: 10px 0;
    background: #161b22;
    border-radius: 8px;
    border: 1px solid #30363d;
  }
  .post-list li:hover { border-color: #58a6ff; }
  .date { color: #8b949e; font-size: 0.9em; }
  .back { margin-bottom: 20px; display: inline-block; }
  code { background: #161b22; padding: 2px 6px; border-radius: 4px; }
  pre { background: #161b22; padding: 15px; border-radius: 8px; overflow-x: auto; }
  blockquote { border-left: 3px solid #58a6ff; margin: 0; padding-left: 15px; color: #8b949e; }
  .emoji { font-size: 1.2em; }
  .header { display: flex; align-items: center; gap: 10px; margin-bottom: 30px; }
  .logo { font-size: 2em; }
  .supplement { padding: 15px; background: #161b22; border-radius: 8px; border: 1px solid #30363d; }
  .divider { display: flex; align-items: center; gap: 10px; margin: 30px 0; color: #8b949e; }
  .divider hr { flex: 1; border: none; border-top: 1px solid #30363d; }
";
