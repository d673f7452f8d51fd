use teloxide::utils::command::BotCommands;

use crate::command::Command;

pub fn start() -> String {
    "👋 ¡Hola! Te mando resúmenes programados de las listas de Twitter. Usá /resumen para generarlo ahora o /help para ver los comandos."
        .to_string()
}

pub fn help() -> String {
    Command::descriptions().to_string()
}

pub fn generating() -> String {
    "⏳ Generando resumen, por favor espera...".to_string()
}

pub fn pipeline_error(error: &str) -> String {
    format!("❌ Error generando el resumen: {error}")
}

pub fn unknown_command() -> String {
    "❌ Comando desconocido".to_string()
}

pub fn internal_server_error() -> String {
    "❌ Error interno del servidor".to_string()
}
