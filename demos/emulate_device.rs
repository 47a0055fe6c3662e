use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment};
use browsermap::environment::Environment;
use browsermap::page::{DocumentHead, LinkElement};
use browsermap::BrowserMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = "http://www.example.com/content/index.html?ref=demo";
    let head = DocumentHead::new()
        .with_link(LinkElement::canonical("http://www.example.com/content/index.html"))
        .with_link(
            LinkElement::alternate("http://m.example.com/content/index.html")
                .with_hreflang("en")
                .with_devgroups("smartphone"),
        );

    for device in DeviceRegistry::all() {
        println!("Emulating: {}", device.title);
        let env = EmulatedEnvironment::builder(device)
            .url(url)
            .head(head.clone())
            .build();

        let mut map = BrowserMap::with_defaults(env)?;
        let outcome = map.forward_request();
        println!("  groups:  {}", outcome.detected.join(", "));
        println!("  state:   {:?}", outcome.state);
        if outcome.navigated {
            println!("  forward: {}", map.env().current_url());
        } else {
            println!("  stays on {}", map.env().current_url());
        }
        println!("  cookies: {}", map.env().cookie_string());
    }

    let device = DeviceRegistry::get_by_title("Pixel 7").ok_or("device not found")?;
    let env = EmulatedEnvironment::builder(device).url(url).build();
    let map = BrowserMap::with_defaults(env)?;
    println!("Probes for Pixel 7: {}", map.probing_results_json());

    Ok(())
}
