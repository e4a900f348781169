//! MyBrowser mini: one window, one page, no chrome and nothing stored.

#[cfg(feature = "gui")]
const START_URL: &str = "https://www.google.com/";

#[cfg(feature = "gui")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("MyBrowser mini failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "gui")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use tao::event::{Event, WindowEvent};
    use tao::event_loop::{ControlFlow, EventLoop};
    use tao::window::WindowBuilder;
    use wry::WebViewBuilder;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("MyBrowser")
        .with_position(tao::dpi::LogicalPosition::new(500.0, 150.0))
        .with_inner_size(tao::dpi::LogicalSize::new(500.0, 500.0))
        .build(&event_loop)?;

    let builder = WebViewBuilder::new()
        .with_url(START_URL)
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let _webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("window has no GTK container")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let _webview = builder.build(&window)?;

    log::info!("Loading {}", START_URL);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        if let Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } = event
        {
            *control_flow = ControlFlow::Exit;
        }
    });
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("mybrowser-mini needs the `gui` feature");
    std::process::exit(1);
}
