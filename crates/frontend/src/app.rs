use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_manufacturer::ui::list::ManufacturerList;
use crate::domain::a003_brand::ui::list::BrandList;
use crate::domain::a004_store::ui::list::StoreList;
use crate::domain::a005_catalog_product::ui::list::CatalogProductList;
use crate::layout::home::HomePage;
use crate::layout::navbar::Navbar;
use crate::projections::p900_scraped_offers::ui::list::ScrapedOfferList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Router>
                <div class="app-layout">
                    <Navbar />
                    <main class="app-main">
                        <Routes fallback=|| view! { <div class="empty-state">"Página no encontrada"</div> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/categories") view=CategoryList />
                            <Route path=path!("/manufacturers") view=ManufacturerList />
                            <Route path=path!("/brands") view=BrandList />
                            <Route path=path!("/products-catalog") view=CatalogProductList />
                            <Route path=path!("/products") view=ScrapedOfferList />
                            <Route path=path!("/stores") view=StoreList />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ConfigProvider>
    }
}
