// SPDX-License-Identifier: MPL-2.0
use rapid_photo_downloader::app::{self, Flags};
use rapid_photo_downloader::logging;

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    let lang = match args.opt_value_from_str::<_, String>("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid --lang argument");
            None
        }
    };

    app::run(Flags { lang })
}
