use yew::prelude::*;

pub struct Disclosure {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const DISCLOSURES: &[Disclosure] = &[
    Disclosure {
        id: "dealer-licence",
        title: "Dealer licence",
        paragraphs: &[
            "Aurum Vault Ltd. is a registered dealer in precious metals, licence no. PMD-2041-778, issued by the national trading standards authority.",
            "Our registration can be verified in the public dealer register. Trading hours, complaints procedure and registered address are published there.",
        ],
    },
    Disclosure {
        id: "aml-kyc",
        title: "Anti-money-laundering and identity checks",
        paragraphs: &[
            "Orders above the statutory threshold require proof of identity and address before dispatch. Cash payments are not accepted.",
            "We are obliged to report suspicious transactions and may not inform the customer when a report has been made.",
        ],
    },
    Disclosure {
        id: "storage-shipping",
        title: "Storage and shipping",
        paragraphs: &[
            "Allocated storage is held in segregated vaults with a third-party custodian and insured at replacement value.",
            "Shipments are fully insured until signed for. Risk passes to the customer on delivery.",
        ],
    },
    Disclosure {
        id: "price-risk",
        title: "Price volatility",
        paragraphs: &[
            "The value of precious metals can fall as well as rise. Past performance is not a reliable indicator of future returns.",
            "Prices shown on this site are indicative. Euro amounts are converted at a fixed reference rate and the final price is confirmed at order time.",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct LicensingProps {
    /// Start with every disclosure open, as on the stand-alone page.
    #[prop_or(false)]
    pub expanded: bool,
}

#[function_component(Licensing)]
pub fn licensing(props: &LicensingProps) -> Html {
    let open = use_state(|| {
        if props.expanded {
            DISCLOSURES.iter().map(|d| d.id).collect::<Vec<_>>()
        } else {
            Vec::new()
        }
    });

    let toggle = {
        let open = open.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*open).clone();
            if let Some(pos) = next.iter().position(|open_id| *open_id == id) {
                next.remove(pos);
            } else {
                next.push(id);
            }
            open.set(next);
        })
    };

    html! {
        <div class="licensing">
            { for DISCLOSURES.iter().map(|disclosure| {
                let is_open = open.contains(&disclosure.id);
                let onclick = toggle.reform(move |_: MouseEvent| disclosure.id);
                html! {
                    <div class={classes!("disclosure", is_open.then(|| "open"))} id={disclosure.id}>
                        <button
                            class="disclosure-toggle"
                            aria-expanded={is_open.to_string()}
                            aria-controls={format!("{}-body", disclosure.id)}
                            {onclick}
                        >
                            <span>{disclosure.title}</span>
                            <span class="disclosure-icon">{ if is_open { "−" } else { "+" } }</span>
                        </button>
                        if is_open {
                            <div class="disclosure-body" id={format!("{}-body", disclosure.id)}>
                                { for disclosure.paragraphs.iter().map(|text| html! { <p>{*text}</p> }) }
                            </div>
                        }
                    </div>
                }
            }) }
            <p class="licensing-footnote">
                {"Aurum Vault Ltd. does not provide investment, tax or legal advice."}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn disclosure_ids_are_unique_anchors() {
        let ids: HashSet<_> = DISCLOSURES.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DISCLOSURES.len());
        assert!(DISCLOSURES.iter().all(|d| !d.paragraphs.is_empty()));
        assert!(ids.iter().all(|id| !id.contains(' ')));
    }
}
