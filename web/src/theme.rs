use splitflap_core::ThemeSwap;

/// Writes a theme swap onto the `<body>` class list.
pub(crate) fn apply(swap: &ThemeSwap) {
    let body = gloo::utils::body();
    let classes = swap.rewrite(&body.class_name());
    log::debug!("theme: {:?} -> {}", swap.previous, swap.next);
    body.set_class_name(&classes);
}
