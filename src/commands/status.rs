use anyhow::Result;

use ddsm_diaries::config::Config;
use ddsm_diaries::internet::InternetProbe;

/// Report connectivity and the effective configuration
pub async fn status(config: Config) -> Result<()> {
    let probe = InternetProbe::from_config(&config.internet);
    let status = probe.check().await;

    println!("ddsm-diaries {}", env!("CARGO_PKG_VERSION"));
    println!("{:-<40}", "");
    println!("Internet:      {status}");
    println!("Holiday API:   {}", config.api.base_url);
    println!("Country:       {} ({})", config.api.country_code, config.api.subdivision);
    println!("Probe hosts:   {}", config.internet.hosts.join(", "));

    let roster = config.roster.to_roster();
    match roster.validate() {
        Ok(()) => println!("Roster:        complete"),
        Err(e) => println!("Roster:        {e}"),
    }

    Ok(())
}
