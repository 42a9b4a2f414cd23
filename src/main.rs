use choice_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "My Questions",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
