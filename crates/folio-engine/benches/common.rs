// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n1. First step\n> A quote with a [link](https://example.org)\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_html_content(size: usize) -> String {
    let base = "<h2>Section</h2><p>Lesson text with <strong>bold</strong> and <em>emphasis</em>&hellip;</p><ul><li>One &amp; two</li><li>Three</li></ul><blockquote>Quote&nbsp;here</blockquote><pre><code class=\"language-js\">let x = 1;</code></pre><hr/>";
    base.repeat(size)
}
