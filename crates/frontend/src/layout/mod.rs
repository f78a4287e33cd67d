//! Application chrome: top navigation bar and home page

pub mod home;
pub mod navbar;

/// One entry of the navigation bar and the home page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub path: &'static str,
    /// Label in the navigation bar
    pub nav_label: &'static str,
    /// Title of the home card
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SECTIONS: [Section; 6] = [
    Section {
        path: "/categories",
        nav_label: "Categorías",
        title: "Categorías",
        icon: "categories",
        description: "Gestiona las categorías de productos y su jerarquía.",
        features: &[
            "Crear y editar categorías",
            "Organización jerárquica",
            "Control de estado (activo/inactivo)",
        ],
    },
    Section {
        path: "/manufacturers",
        nav_label: "Fabricantes",
        title: "Fabricantes",
        icon: "manufacturers",
        description: "Administra los fabricantes de marcas.",
        features: &[
            "Crear y editar fabricantes",
            "Información fiscal y de negocio",
            "Gestión de marcas asociadas",
        ],
    },
    Section {
        path: "/brands",
        nav_label: "Marcas",
        title: "Marcas",
        icon: "brands",
        description: "Gestiona las marcas de los productos.",
        features: &[
            "Crear y editar marcas",
            "Asociar con fabricantes",
            "Control de estado (activo/inactivo)",
        ],
    },
    Section {
        path: "/products-catalog",
        nav_label: "Catálogo",
        title: "Catálogo de Productos",
        icon: "catalog",
        description: "Administra los productos únicos del catálogo.",
        features: &[
            "SKU, marca y categoría",
            "Atributos libres en JSON",
            "Control de estado (activo/inactivo)",
        ],
    },
    Section {
        path: "/products",
        nav_label: "Scrapeados",
        title: "Productos Scrapeados",
        icon: "offers",
        description: "Consulta los precios observados en cada tienda.",
        features: &[
            "Ofertas agrupadas por producto",
            "Precio, precio original y stock",
            "Fecha del último scraping",
        ],
    },
    Section {
        path: "/stores",
        nav_label: "Tiendas",
        title: "Tiendas",
        icon: "stores",
        description: "Administra las tiendas y puntos de venta.",
        features: &[
            "Crear y editar tiendas",
            "URL base para el scraping",
            "Control de estado (activo/inactivo)",
        ],
    },
];

/// Exact match, ignoring a trailing slash
pub fn is_active(current: &str, path: &str) -> bool {
    let trim = |p: &str| -> String {
        let t = p.trim_end_matches('/');
        if t.is_empty() { "/".to_string() } else { t.to_string() }
    };
    trim(current) == trim(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_route_is_exact() {
        assert!(is_active("/", "/"));
        assert!(is_active("/brands/", "/brands"));
        assert!(!is_active("/products-catalog", "/products"));
        assert!(!is_active("/brands", "/"));
    }

    #[test]
    fn section_paths_are_unique() {
        let mut paths: Vec<_> = SECTIONS.iter().map(|s| s.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), SECTIONS.len());
    }
}
