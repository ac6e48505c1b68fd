use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::licensing::Licensing;
use crate::components::shared_styles::SharedStyles;
use crate::pages::landing::Footer;

#[function_component(LicensingPage)]
pub fn licensing_page() -> Html {
    html! {
        <div class="landing-page licensing-page">
            <div class="licensing-section" style="padding-top: 8rem;">
                <AnimatedSection>
                    <h1>{"Licensing and disclosures"}</h1>
                    <p>{"What we are licensed to do, what we are required to check, and the risks of holding physical metal."}</p>
                </AnimatedSection>
                <Licensing expanded={true} />
            </div>
            <Footer />
            <SharedStyles />
        </div>
    }
}
