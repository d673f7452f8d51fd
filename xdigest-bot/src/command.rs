use teloxide::utils::command::BotCommands;

#[derive(BotCommands)]
#[command(rename_rule = "lowercase", description = "Comandos disponibles:")]
pub(crate) enum Command {
    #[command(description = "Mostrar este mensaje de ayuda")]
    Help,
    #[command(description = "Iniciar el bot")]
    Start,
    #[command(description = "Generar el resumen de las listas ahora")]
    Resumen,
}
