use xdigest_common::Post;

pub const NO_POSTS_MESSAGE: &str = "No se encontraron tweets en las listas.";

/// Numbered transcript, one `"{i}. @{username}: {text}"` block per post
pub fn render_transcript(posts: &[Post]) -> String {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| format!("{}. @{}: {}\n\n", i + 1, post.username, post.text))
        .collect()
}

pub fn build_prompt(posts: &[Post]) -> String {
    format!(
        "Sos mi asistente personal. Aca estan los tweets mas recientes de mis listas de Twitter.

Haceme un resumen claro y util en español. Organizalo por temas importantes. Destaca lo mas relevante. Se conciso pero completo. Usa emojis para que sea facil de leer.

TWEETS:
{}
Resumen:",
        render_transcript(posts)
    )
}
