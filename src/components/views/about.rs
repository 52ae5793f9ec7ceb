use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "prose prose-invert max-w-2xl space-y-4",
            h1 { class: "text-2xl font-bold", "About Dreamster" }
            p {
                "Dreamster is a marketplace where fans buy music directly from the "
                "musicians who made it. Artists set their own prices and royalties, "
                "and every sale settles to them without a label in between."
            }
            p {
                "Each purchase mints a collectible the fan keeps in their wallet, "
                "along with any perks the artist attaches: stems, early releases, "
                "ticket priority."
            }
            p { class: "opacity-70",
                "Musicians publish through the studio after a short review. Fans "
                "listen free in preview and own the full track after purchase."
            }
        }
    }
}
