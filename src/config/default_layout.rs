use crate::filesystem::{DIRECT_FILES_KEY, TreeNode};

/// The front-end skeleton created when no layout file is given.
pub fn default_layout() -> TreeNode {
    TreeNode::directory([(
        "src",
        TreeNode::directory([
            (
                "components",
                TreeNode::directory([
                    ("Layout", TreeNode::files(["Header.jsx", "Layout.jsx"])),
                    (
                        "Menu",
                        TreeNode::files(["MenuPage.jsx", "MenuCategory.jsx", "MenuItem.jsx"]),
                    ),
                    (
                        "Cart",
                        TreeNode::files(["ShoppingCart.jsx", "CartItem.jsx", "CartSummary.jsx"]),
                    ),
                    ("Checkout", TreeNode::files(["CheckoutPage.jsx"])),
                ]),
            ),
            ("context", TreeNode::files(["CartContext.jsx"])),
            ("hooks", TreeNode::files(["useApi.jsx"])),
            ("services", TreeNode::files(["api.js"])),
            ("utils", TreeNode::files(["constants.js"])),
            (DIRECT_FILES_KEY, TreeNode::files(["App.jsx"])),
        ]),
    )])
}
